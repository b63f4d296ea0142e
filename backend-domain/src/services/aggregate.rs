// Join/aggregate stage: order line items against placement parameters

use std::collections::HashMap;

use crate::entities::{Order, OrderSummary, PlacementParameter};

// Dimensions and weights are stored in hundredths of a meter / kilogram.
const STORAGE_SCALE: f64 = 100.0;

/// Cross-references every order line item against the placement record with
/// the matching product id. Unmatched references contribute nothing (an
/// accepted data-quality gap in the store) but are counted for visibility.
/// Weight and volume accumulate independently: a record missing any of
/// width/length/height contributes zero volume while still contributing its
/// weight.
pub fn summarize_orders(orders: &[Order], params: &[PlacementParameter]) -> OrderSummary {
    let by_product: HashMap<&str, &PlacementParameter> = params
        .iter()
        .map(|param| (param.product_id.as_str(), param))
        .collect();

    let mut summary = OrderSummary {
        total_orders: orders.len() as u64,
        ..OrderSummary::default()
    };

    for order in orders {
        for line in &order.products {
            summary.total_products += line.amount;
            let Some(param) = by_product.get(line.parameter_product_id.as_str()) else {
                summary.unjoined_products += 1;
                continue;
            };
            if let Some(weight) = param.weight {
                summary.total_weight_kg += weight / STORAGE_SCALE * line.amount as f64;
            }
            if let (Some(width), Some(length), Some(height)) =
                (param.width, param.length, param.height)
            {
                summary.total_volume_m3 +=
                    (width / STORAGE_SCALE) * (length / STORAGE_SCALE) * (height / STORAGE_SCALE);
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderProduct;

    fn order(lines: &[(&str, i64)]) -> Order {
        Order {
            status_id: Some(1),
            products: lines
                .iter()
                .map(|(id, amount)| OrderProduct {
                    parameter_product_id: id.to_string(),
                    amount: *amount,
                })
                .collect(),
        }
    }

    fn param(id: &str, dims: Option<(f64, f64, f64)>, weight: Option<f64>) -> PlacementParameter {
        PlacementParameter {
            product_id: id.to_string(),
            width: dims.map(|(w, _, _)| w),
            length: dims.map(|(_, l, _)| l),
            height: dims.map(|(_, _, h)| h),
            weight,
        }
    }

    #[test]
    fn unit_cube_contributes_unit_volume_and_scaled_weight() {
        let orders = vec![order(&[("A", 2)])];
        let params = vec![param("A", Some((100.0, 100.0, 100.0)), Some(500.0))];
        let summary = summarize_orders(&orders, &params);
        assert_eq!(summary.total_orders, 1);
        assert_eq!(summary.total_products, 2);
        assert!((summary.total_weight_kg - 10.0).abs() < 1e-9);
        assert!((summary.total_volume_m3 - 1.0).abs() < 1e-9);
        assert_eq!(summary.unjoined_products, 0);
    }

    #[test]
    fn unmatched_reference_contributes_nothing() {
        let orders = vec![order(&[("missing", 3)])];
        let params = vec![param("A", Some((100.0, 100.0, 100.0)), Some(500.0))];
        let summary = summarize_orders(&orders, &params);
        assert_eq!(summary.total_weight_kg, 0.0);
        assert_eq!(summary.total_volume_m3, 0.0);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.unjoined_products, 1);
    }

    #[test]
    fn missing_dimension_zeroes_volume_but_keeps_weight() {
        let orders = vec![order(&[("A", 1)])];
        let mut partial = param("A", Some((100.0, 100.0, 100.0)), Some(250.0));
        partial.height = None;
        let summary = summarize_orders(&orders, &[partial]);
        assert!((summary.total_weight_kg - 2.5).abs() < 1e-9);
        assert_eq!(summary.total_volume_m3, 0.0);
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let orders = vec![order(&[("A", 1), ("B", 2)]), order(&[("B", 1)])];
        let params = vec![
            param("A", Some((100.0, 50.0, 20.0)), Some(120.0)),
            param("B", Some((30.0, 30.0, 30.0)), Some(75.0)),
        ];

        let forward = summarize_orders(&orders, &params);

        let mut shuffled_orders = orders.clone();
        shuffled_orders.reverse();
        let mut shuffled_params = params.clone();
        shuffled_params.reverse();
        let reversed = summarize_orders(&shuffled_orders, &shuffled_params);

        assert!((forward.total_weight_kg - reversed.total_weight_kg).abs() < 1e-9);
        assert!((forward.total_volume_m3 - reversed.total_volume_m3).abs() < 1e-9);
        assert_eq!(forward.total_products, reversed.total_products);
    }

    #[test]
    fn empty_inputs_produce_a_zero_summary() {
        let summary = summarize_orders(&[], &[]);
        assert_eq!(summary, OrderSummary::default());
    }
}
