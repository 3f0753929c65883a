//! Order payload validation
//!
//! Guard functions run before anything touches storage. A payload either
//! passes completely or nothing is written.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderCreate, OrderItem, OrderStatus, OrderStatusUpdate};

use super::money;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// An order that passed validation, with its computed total
///
/// Only [`validate_order_create`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    table_number: i32,
    items: Vec<OrderItem>,
    total_price: Decimal,
}

impl NewOrder {
    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// Validate a create payload and compute its total
///
/// Checks, in order: `table_number > 0`, `items` non-empty, then per item a
/// non-empty name and a positive price with at most 2 decimal places, then
/// the total bound. The first violation is returned.
pub fn validate_order_create(input: OrderCreate) -> AppResult<NewOrder> {
    if input.table_number <= 0 {
        return Err(AppError::invalid_field(
            "table_number",
            format!(
                "table_number must be a positive integer, got {}",
                input.table_number
            ),
        ));
    }

    if input.items.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::OrderEmpty, "items must not be empty")
                .with_detail("field", "items"),
        );
    }

    for (i, item) in input.items.iter().enumerate() {
        validate_item(i, item)?;
    }

    let total_price = money::sum_prices(input.items.iter().map(|item| &item.price))
        .filter(|total| *total <= money::MAX_TOTAL)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("total_price must not exceed {}", money::MAX_TOTAL),
            )
            .with_detail("field", "total_price")
        })?;

    Ok(NewOrder {
        table_number: input.table_number,
        items: input.items,
        total_price,
    })
}

fn validate_item(index: usize, item: &OrderItem) -> AppResult<()> {
    validate_required_text(&item.name, &format!("items[{index}].name"), MAX_NAME_LEN)?;

    let field = format!("items[{index}].price");
    if item.price <= Decimal::ZERO {
        return Err(AppError::invalid_field(
            &field,
            format!("{field} must be greater than 0, got {}", item.price),
        ));
    }
    if !money::has_valid_scale(item.price) {
        return Err(AppError::invalid_field(
            &field,
            format!(
                "{field} must have at most {} decimal places, got {}",
                money::DECIMAL_PLACES,
                item.price
            ),
        ));
    }
    Ok(())
}

/// Parse the requested status, rejecting anything outside pending/ready/paid
pub fn parse_status(input: &OrderStatusUpdate) -> AppResult<OrderStatus> {
    input.status.parse().map_err(|e: shared::models::InvalidOrderStatus| {
        AppError::with_message(ErrorCode::OrderInvalidStatus, e.to_string())
            .with_detail("field", "status")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn item(name: &str, price: Decimal) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            price,
        }
    }

    fn create(table_number: i32, items: Vec<OrderItem>) -> OrderCreate {
        OrderCreate {
            table_number,
            items,
        }
    }

    #[test]
    fn test_valid_order_total() {
        let order = validate_order_create(create(
            5,
            vec![item("Espresso", dec!(2.50)), item("Croissant", dec!(3.25))],
        ))
        .unwrap();
        assert_eq!(order.table_number(), 5);
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.total_price(), dec!(5.75));
    }

    #[test]
    fn test_total_is_exact() {
        let order = validate_order_create(create(
            1,
            vec![item("a", dec!(0.1)), item("b", dec!(0.2))],
        ))
        .unwrap();
        assert_eq!(order.total_price(), dec!(0.3));
    }

    #[test]
    fn test_table_number_must_be_positive() {
        for table in [0, -3] {
            let err = validate_order_create(create(table, vec![item("Tea", dec!(2))])).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(err.field(), Some("table_number"));
        }
    }

    #[test]
    fn test_items_must_not_be_empty() {
        let err = validate_order_create(create(3, vec![])).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert_eq!(err.field(), Some("items"));
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in [Decimal::ZERO, dec!(-1.50)] {
            let err = validate_order_create(create(
                3,
                vec![item("Tea", dec!(2)), item("Cake", price)],
            ))
            .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(err.field(), Some("items[1].price"));
        }
    }

    #[test]
    fn test_price_precision() {
        let err = validate_order_create(create(3, vec![item("Tea", dec!(2.505))])).unwrap_err();
        assert_eq!(err.field(), Some("items[0].price"));

        assert!(validate_order_create(create(3, vec![item("Tea", dec!(2.500))])).is_ok());
    }

    #[test]
    fn test_name_must_not_be_blank() {
        let err = validate_order_create(create(
            3,
            vec![item("Tea", dec!(2)), item("Soup", dec!(4)), item("  ", dec!(1))],
        ))
        .unwrap_err();
        assert_eq!(err.field(), Some("items[2].name"));
    }

    #[test]
    fn test_name_length_limit() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_order_create(create(3, vec![item(&name, dec!(1))])).unwrap_err();
        assert_eq!(err.field(), Some("items[0].name"));
    }

    #[test]
    fn test_total_bound() {
        let at_limit = validate_order_create(create(
            1,
            vec![item("a", dec!(99999999.00)), item("b", dec!(0.99))],
        ))
        .unwrap();
        assert_eq!(at_limit.total_price(), money::MAX_TOTAL);

        let err = validate_order_create(create(
            1,
            vec![item("a", dec!(99999999.99)), item("b", dec!(0.01))],
        ))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.field(), Some("total_price"));
    }

    #[test]
    fn test_first_violation_wins() {
        let err = validate_order_create(create(0, vec![])).unwrap_err();
        assert_eq!(err.field(), Some("table_number"));
    }

    #[test]
    fn test_parse_status() {
        for status in OrderStatus::ALL {
            let input = OrderStatusUpdate {
                status: status.as_str().to_string(),
            };
            assert_eq!(parse_status(&input).unwrap(), status);
        }

        for bad in ["cancelled", "PAID", "", " ready"] {
            let err = parse_status(&OrderStatusUpdate {
                status: bad.to_string(),
            })
            .unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
            assert_eq!(err.field(), Some("status"));
            assert!(err.code.is_validation());
        }
    }
}
