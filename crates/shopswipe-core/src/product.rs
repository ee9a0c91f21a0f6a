use std::fmt;

/// Stable product identifier from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product card in the swipe stack. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub image_url: String,
    pub price: u64,
    pub original_price: u64,
    pub discount_percentage: u8,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            brand: brand.into(),
            image_url: String::new(),
            price: 0,
            original_price: 0,
            discount_percentage: 0,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set the selling price, the list price and the advertised discount.
    pub fn with_pricing(mut self, price: u64, original_price: u64, discount_percentage: u8) -> Self {
        self.price = price;
        self.original_price = original_price;
        self.discount_percentage = discount_percentage;
        self
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0
    }

    /// Whether the list price should be shown struck through.
    pub fn is_marked_down(&self) -> bool {
        self.original_price > self.price
    }
}

/// Formats a rupee amount with thousands separators, e.g. `₹1,299`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}
