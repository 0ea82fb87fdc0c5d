//! Type definitions for projection statistics

use serde::{Deserialize, Serialize};

use crate::json::{compact_json_len, utf8_len};
use crate::projection::Projection;

/// Number of counted records with each optional field populated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonemptyCounts {
    pub brand: u64,
    pub name: u64,
    pub ingredients: u64,
    pub images: u64,
}

/// Running counters for one estimation run
///
/// Only records with a usable barcode touch anything other than
/// `total_records` and `processed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTotals {
    pub total_records: u64,
    pub processed: u64,
    pub projected_records_with_barcode: u64,
    pub barcode_bytes: u64,
    pub brand_bytes: u64,
    pub name_bytes: u64,
    pub ingredients_bytes: u64,
    pub images_bytes: u64,
    pub nonempty: NonemptyCounts,
}

impl FieldTotals {
    /// Add one projected record
    pub fn absorb(&mut self, projection: &Projection) {
        let Some(barcode) = projection.barcode() else {
            return;
        };

        self.projected_records_with_barcode += 1;
        self.barcode_bytes += utf8_len(Some(barcode));

        if let Some(brand) = projection.brand.as_deref().filter(|b| !b.is_empty()) {
            self.nonempty.brand += 1;
            self.brand_bytes += utf8_len(Some(brand));
        }

        if let Some(name) = projection.name.as_deref().filter(|n| !n.is_empty()) {
            self.nonempty.name += 1;
            self.name_bytes += utf8_len(Some(name));
        }

        if !projection.ingredients.is_empty() {
            self.nonempty.ingredients += 1;
            self.ingredients_bytes += compact_json_len(&projection.ingredients);
        }

        if !projection.images.is_empty() {
            self.nonempty.images += 1;
            self.images_bytes += compact_json_len(&projection.images);
        }
    }

    /// Sum of the five per-field byte totals
    pub fn payload_bytes(&self) -> u64 {
        self.barcode_bytes
            + self.brand_bytes
            + self.name_bytes
            + self.ingredients_bytes
            + self.images_bytes
    }

    /// Freeze the counters into the final report
    pub fn finish(self, elapsed_seconds: f64) -> ProjectionStats {
        let payload = self.payload_bytes();
        let avg = if self.projected_records_with_barcode == 0 {
            0.0
        } else {
            payload as f64 / self.projected_records_with_barcode as f64
        };

        ProjectionStats {
            total_records: self.total_records,
            projected_records_with_barcode: self.projected_records_with_barcode,
            barcode_bytes_total: self.barcode_bytes,
            brand_bytes_total: self.brand_bytes,
            name_bytes_total: self.name_bytes,
            ingredients_bytes_total: self.ingredients_bytes,
            images_bytes_total: self.images_bytes,
            nonempty_counts: self.nonempty,
            elapsed_seconds,
            projected_payload_bytes_total: payload,
            avg_payload_bytes_per_projected_row: avg,
        }
    }
}

/// Final report of an estimation run
///
/// Field order is the key order of the emitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionStats {
    pub total_records: u64,
    pub projected_records_with_barcode: u64,
    pub barcode_bytes_total: u64,
    pub brand_bytes_total: u64,
    pub name_bytes_total: u64,
    pub ingredients_bytes_total: u64,
    pub images_bytes_total: u64,
    pub nonempty_counts: NonemptyCounts,
    pub elapsed_seconds: f64,
    pub projected_payload_bytes_total: u64,
    pub avg_payload_bytes_per_projected_row: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ImageRef, IngredientNode};

    fn with_barcode(code: &str) -> Projection {
        Projection {
            barcode: Some(code.to_string()),
            ..Projection::default()
        }
    }

    #[test]
    fn test_absorb_ignores_records_without_barcode() {
        let mut totals = FieldTotals::default();
        totals.absorb(&Projection {
            barcode: None,
            brand: Some("Acme".to_string()),
            name: Some("Milk".to_string()),
            ingredients: vec![IngredientNode::default()],
            images: vec![ImageRef::new("a.jpg")],
        });
        totals.absorb(&with_barcode(""));

        assert_eq!(totals, FieldTotals::default());
    }

    #[test]
    fn test_absorb_barcode_only() {
        let mut totals = FieldTotals::default();
        totals.absorb(&with_barcode("999"));

        assert_eq!(totals.projected_records_with_barcode, 1);
        assert_eq!(totals.barcode_bytes, 3);
        assert_eq!(totals.nonempty, NonemptyCounts::default());
        assert_eq!(totals.payload_bytes(), 3);
    }

    #[test]
    fn test_absorb_sizes_every_field() {
        let mut totals = FieldTotals::default();
        totals.absorb(&Projection {
            barcode: Some("123".to_string()),
            brand: Some("Nestlé".to_string()),
            name: Some("Milk".to_string()),
            ingredients: vec![IngredientNode {
                name: Some("milk".to_string()),
                ..IngredientNode::default()
            }],
            images: vec![ImageRef::new("http://x/a.jpg")],
        });

        assert_eq!(totals.brand_bytes, 7);
        assert_eq!(totals.name_bytes, 4);
        assert_eq!(
            totals.ingredients_bytes,
            r#"[{"name":"milk","vegan":null,"vegetarian":null,"ingredients":[]}]"#.len() as u64
        );
        assert_eq!(totals.images_bytes, r#"[{"url":"http://x/a.jpg"}]"#.len() as u64);
        assert_eq!(
            totals.nonempty,
            NonemptyCounts {
                brand: 1,
                name: 1,
                ingredients: 1,
                images: 1
            }
        );
    }

    #[test]
    fn test_finish_without_rows_has_zero_average() {
        let stats = FieldTotals::default().finish(0.5);
        assert_eq!(stats.avg_payload_bytes_per_projected_row, 0.0);
        assert_eq!(stats.projected_payload_bytes_total, 0);
        assert_eq!(stats.elapsed_seconds, 0.5);
    }

    #[test]
    fn test_finish_average() {
        let mut totals = FieldTotals::default();
        totals.absorb(&with_barcode("1"));
        totals.absorb(&with_barcode("1234"));

        let stats = totals.finish(0.0);
        assert_eq!(stats.projected_payload_bytes_total, 5);
        assert_eq!(stats.avg_payload_bytes_per_projected_row, 2.5);
    }

    #[test]
    fn test_report_key_order() {
        let json = serde_json::to_string(&FieldTotals::default().finish(0.0)).unwrap();
        let keys = [
            "total_records",
            "projected_records_with_barcode",
            "barcode_bytes_total",
            "brand_bytes_total",
            "name_bytes_total",
            "ingredients_bytes_total",
            "images_bytes_total",
            "nonempty_counts",
            "elapsed_seconds",
            "projected_payload_bytes_total",
            "avg_payload_bytes_per_projected_row",
        ];

        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(&format!("\"{}\"", key)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{}", json);
    }
}
