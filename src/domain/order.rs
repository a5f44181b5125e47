use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Paid => f.write_str("paid"),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Debit,
    Credit,
    Paypal,
}

impl PaymentMethod {
    /// Debit and PayPal need a verified second factor before paying.
    pub fn requires_authorization(&self) -> bool {
        matches!(self, PaymentMethod::Debit | PaymentMethod::Paypal)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Debit => f.write_str("debit"),
            PaymentMethod::Credit => f.write_str("credit"),
            PaymentMethod::Paypal => f.write_str("paypal"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(PaymentMethod::Debit),
            "credit" => Ok(PaymentMethod::Credit),
            "paypal" => Ok(PaymentMethod::Paypal),
            _ => Err(PaymentError::UnknownPaymentType(s.to_string())),
        }
    }
}

/// One (name, quantity, unit price) triple within an [`Order`].
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct LineItem {
    pub item: String,
    pub quantity: u32,
    pub price: u64,
}

impl LineItem {
    pub fn new(item: impl Into<String>, quantity: u32, price: u64) -> Self {
        Self {
            item: item.into(),
            quantity,
            price,
        }
    }

    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.price)
    }
}

/// Parses `NAME:QTY:PRICE`. The name may itself contain colons.
impl FromStr for LineItem {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(price), Some(quantity), Some(item)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(PaymentError::InvalidLineItem(format!(
                "expected NAME:QTY:PRICE, got '{s}'"
            )));
        };
        if item.is_empty() {
            return Err(PaymentError::InvalidLineItem(format!(
                "missing item name in '{s}'"
            )));
        }
        let quantity = quantity
            .trim()
            .parse()
            .map_err(|_| PaymentError::InvalidLineItem(format!("bad quantity in '{s}'")))?;
        let price = price
            .trim()
            .parse()
            .map_err(|_| PaymentError::InvalidLineItem(format!("bad price in '{s}'")))?;
        Ok(Self::new(item, quantity, price))
    }
}

/// The aggregate of purchased line items and its payment status.
///
/// Line items are kept as three parallel sequences. Every mutation goes through
/// [`Order::add_item`], so index `i` of each sequence always describes the same
/// line item. The status only moves to [`OrderStatus::Paid`] through a payment
/// processor.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Order {
    items: Vec<String>,
    quantities: Vec<u32>,
    prices: Vec<u64>,
    status: OrderStatus,
}

impl Order {
    /// Creates an empty, open order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open order seeded with parallel sequences.
    ///
    /// Fails with [`PaymentError::MismatchedLineItems`] unless all three
    /// sequences have the same length.
    pub fn with_items(items: Vec<String>, quantities: Vec<u32>, prices: Vec<u64>) -> Result<Self> {
        if items.len() != quantities.len() || items.len() != prices.len() {
            return Err(PaymentError::MismatchedLineItems {
                items: items.len(),
                quantities: quantities.len(),
                prices: prices.len(),
            });
        }
        Ok(Self {
            items,
            quantities,
            prices,
            status: OrderStatus::Open,
        })
    }

    /// Appends one line item to the order.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32, price: u64) {
        self.items.push(name.into());
        self.quantities.push(quantity);
        self.prices.push(price);
    }

    pub fn add_line_item(&mut self, line_item: LineItem) {
        self.add_item(line_item.item, line_item.quantity, line_item.price);
    }

    /// Sum of quantity x price over every line item. Saturates at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.quantities
            .iter()
            .zip(&self.prices)
            .fold(0u64, |total, (&quantity, &price)| {
                total.saturating_add(u64::from(quantity).saturating_mul(price))
            })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    pub fn prices(&self) -> &[u64] {
        &self.prices
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line_items(&self) -> impl Iterator<Item = LineItem> + '_ {
        self.items
            .iter()
            .zip(&self.quantities)
            .zip(&self.prices)
            .map(|((item, &quantity), &price)| LineItem::new(item.clone(), quantity, price))
    }

    /// Only payment processors settle an order. No check on the prior status.
    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}

impl FromIterator<LineItem> for Order {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        let mut order = Order::new();
        for line_item in iter {
            order.add_line_item(line_item);
        }
        order
    }
}
