// src/domain/billing_desk.rs
use super::cart::{CartItem, CartLedger, Receipt};
use super::core::Errors;
use super::display::DisplaySink;

pub struct BillingDesk<D: DisplaySink> {
    ledger: CartLedger,
    display: D,
}

impl<D: DisplaySink> BillingDesk<D> {
    pub fn new(display: D) -> Self {
        BillingDesk {
            ledger: CartLedger::new(),
            display,
        }
    }

    pub fn add_item(&mut self, name: &str, price_text: &str) -> Result<CartItem, Errors> {
        match self.ledger.add_item(name, price_text) {
            Ok(item) => {
                let item = item.clone();
                self.display
                    .append_line(&format!("Added: {} - ${}", item.name, item.price));
                Ok(item)
            }
            Err(e) => {
                self.display.append_line(&e.to_string());
                Err(e)
            }
        }
    }

    /// Prints the receipt over whatever the display held and empties the cart.
    pub fn checkout(&mut self) -> Receipt {
        let receipt = self.ledger.checkout();
        self.display.replace_text(&receipt.to_string());
        receipt
    }

    /// Clears the display only; the cart keeps its items and total.
    pub fn clear_receipt(&mut self) {
        self.display.clear();
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
