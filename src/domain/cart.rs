// src/domain/cart.rs
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::money::Amount;
use super::core::Errors;

const RULE: &str = "====================";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: Amount,
}

/// What a checkout hands back: the cart as it was, plus its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<CartItem>,
    pub total: Amount,
    #[serde(rename = "issuedAt")]
    pub issued_at: DateTime<Utc>,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receipt:")?;
        writeln!(f, "{}", RULE)?;
        for item in &self.items {
            writeln!(f, "{} - ${}", item.name, item.price)?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Total Amount: ${}", self.total)
    }
}

#[derive(Debug, Default)]
pub struct CartLedger {
    items: Vec<CartItem>,
    total: Amount,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `price_text` and appends the item. Nothing changes on a bad
    /// price or when the total would overflow.
    pub fn add_item(&mut self, name: impl Into<String>, price_text: &str) -> Result<&CartItem, Errors> {
        let price = price_text.parse::<Amount>().map_err(|e| {
            warn!("rejected item price {:?}: {}", price_text, e);
            Errors::InvalidPrice(price_text.to_string())
        })?;
        self.add_priced_item(name, price)
    }

    pub fn add_priced_item(&mut self, name: impl Into<String>, price: Amount) -> Result<&CartItem, Errors> {
        let total = (self.total + price).map_err(|e| {
            warn!("rejected item priced {}: {}", price, e);
            Errors::TotalOutOfRange
        })?;

        self.total = total;
        self.items.push(CartItem {
            name: name.into(),
            price,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checkout(&mut self) -> Receipt {
        self.checkout_at(Utc::now())
    }

    /// Takes the whole cart and leaves it empty.
    pub fn checkout_at(&mut self, issued_at: DateTime<Utc>) -> Receipt {
        let receipt = Receipt {
            items: std::mem::take(&mut self.items),
            total: std::mem::replace(&mut self.total, Amount::ZERO),
            issued_at,
        };
        info!("checkout of {} items, total {}", receipt.items.len(), receipt.total);
        receipt
    }
}
