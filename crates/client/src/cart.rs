//! Shopping cart line items.

use bookstore_core::types::DbId;
use bookstore_db::models::book::Book;
use rust_decimal::Decimal;

/// A book in the cart together with how many copies were added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub book: Book,
    /// Always at least 1; a line that would reach 0 is removed.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (`price * quantity`).
    pub fn line_total(&self) -> Decimal {
        self.book.price * Decimal::from(self.quantity)
    }
}

/// Client-side cart. At most one line per book id, in the order books were
/// first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.book.id == id)
    }

    pub fn contains(&self, id: DbId) -> bool {
        self.get(id).is_some()
    }

    /// Add one copy of `book`: a new line at quantity 1, or +1 on an existing line.
    pub fn add(&mut self, book: Book) {
        match self.items.iter_mut().find(|item| item.book.id == book.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem { book, quantity: 1 }),
        }
    }

    /// Drop the line for `id` regardless of quantity.
    pub fn remove(&mut self, id: DbId) {
        self.items.retain(|item| item.book.id != id);
    }

    /// +1 on the line for `id`. No-op if the book is not in the cart.
    pub fn increase(&mut self, id: DbId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.book.id == id) {
            item.quantity += 1;
        }
    }

    /// -1 on the line for `id`, removing the line when it reaches 0.
    pub fn decrease(&mut self, id: DbId) {
        let Some(item) = self.items.iter_mut().find(|item| item.book.id == id) else {
            return;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Number of copies across all lines.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::str::FromStr;

    use chrono::Utc;

    use super::*;

    pub(crate) fn book(id: DbId, name: &str, price: &str) -> Book {
        let now = Utc::now();
        Book {
            id,
            bookname: name.to_string(),
            isbn: format!("isbn-{id}"),
            price: Decimal::from_str(price).unwrap(),
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_adding_same_book_twice_makes_one_line_with_quantity_two() {
        let mut cart = Cart::default();
        let dune = book(1, "Dune", "9.99");
        cart.add(dune.clone());
        cart.add(dune);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let mut cart = Cart::default();
        cart.add(book(2, "B", "1"));
        cart.add(book(1, "A", "1"));
        cart.add(book(2, "B", "1"));

        let ids: Vec<DbId> = cart.items().iter().map(|i| i.book.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_decrease_to_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(book(1, "Dune", "9.99"));
        cart.add(book(1, "Dune", "9.99"));

        cart.decrease(1);
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        cart.decrease(1);
        assert!(!cart.contains(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_and_decrease_ignore_unknown_ids() {
        let mut cart = Cart::default();
        cart.add(book(1, "Dune", "9.99"));
        cart.increase(99);
        cart.decrease(99);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = Cart::default();
        cart.add(book(1, "Dune", "9.99"));
        cart.increase(1);
        cart.increase(1);
        cart.remove(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = Cart::default();
        cart.add(book(1, "Dune", "9.99"));
        cart.add(book(1, "Dune", "9.99"));
        cart.add(book(2, "Emma", "5.01"));

        assert_eq!(cart.total(), Decimal::from_str("25.00").unwrap());
        assert_eq!(cart.count(), 3);

        cart.clear();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }
}
