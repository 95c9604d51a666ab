//! 生產建議彙總器
//!
//! 對快照中每個有配方的產品執行可行性估算，過濾出可生產者並計算
//! 總價值。各產品獨立估算（不跨產品預留庫存），因此可安全並行。

use rayon::prelude::*;
use rust_decimal::Decimal;

use ctp_core::PlanningSnapshot;

use crate::calculator::{FeasibilityCalculator, FeasibilityOutcome};
use crate::{ProductionSuggestion, SuggestionResult, SuggestionWarning};

/// 生產建議彙總器
pub struct SuggestionAggregator;

impl SuggestionAggregator {
    /// 對整份快照計算生產建議
    ///
    /// 輸出規則：
    /// - 產品沒有配方：不出現在輸出（未定義，而非 0）
    /// - `max_units == 0`：不出現在輸出
    /// - 配方引用已消失的原料：該產品排除並記錄警告，其餘產品照常計算
    /// - 排序：單位價值遞減，並列時依產品ID，對相同輸入完全確定
    pub fn suggest(snapshot: &PlanningSnapshot) -> SuggestionResult {
        let start_time = std::time::Instant::now();
        tracing::info!(
            "開始生產建議計算：產品 {} 項，原料 {} 項",
            snapshot.products.len(),
            snapshot.materials.len()
        );

        // 各產品獨立估算；collect 保持輸入順序，輸出仍為確定性
        let outcomes: Vec<_> = snapshot
            .products
            .par_iter()
            .map(|product| {
                let entries = snapshot.entries_for(product.id);
                (
                    product,
                    FeasibilityCalculator::estimate(product, entries, &snapshot.materials),
                )
            })
            .collect();

        let mut result = SuggestionResult::empty();

        for (product, outcome) in outcomes {
            match outcome {
                FeasibilityOutcome::NoRecipe => {
                    tracing::debug!("產品 {} 沒有配方，跳過", product.id);
                }
                FeasibilityOutcome::MissingMaterial { raw_material_id } => {
                    tracing::warn!(
                        "產品 {} 的配方引用了不存在的原料 {}，排除該產品",
                        product.id,
                        raw_material_id
                    );
                    result.add_warning(SuggestionWarning::error(
                        product.id,
                        format!("配方引用了不存在的原料 {}", raw_material_id),
                    ));
                }
                FeasibilityOutcome::Estimate(estimate) => {
                    if estimate.max_units == 0 {
                        tracing::debug!("產品 {} 可生產數量為 0，跳過", product.id);
                        continue;
                    }
                    result.suggestions.push(ProductionSuggestion {
                        product_id: product.id,
                        product_name: product.name.clone(),
                        unit_value: product.unit_value,
                        quantity: estimate.max_units,
                        total_value: estimate.estimated_value,
                    });
                }
            }
        }

        // 單位價值遞減；並列時依產品ID
        result.suggestions.sort_by(|a, b| {
            b.unit_value
                .cmp(&a.unit_value)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });

        result.grand_total_value = result
            .suggestions
            .iter()
            .map(|s| s.total_value)
            .sum::<Decimal>();

        tracing::info!(
            "生產建議計算完成：{} 項建議，總價值 {}，耗時 {:?}",
            result.suggestions.len(),
            result.grand_total_value,
            start_time.elapsed()
        );

        result
    }
}
