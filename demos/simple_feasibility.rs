//! 簡單生產可行性計算示例

use rust_decimal::Decimal;

use ctp::{
    CatalogStore, InMemoryPlanningStore, PlanningService, Product, RawMaterial, RecipeEntryRequest,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 簡單生產可行性計算示例 ===\n");

    let store = InMemoryPlanningStore::new();

    // 建立目錄
    let chair = store.insert_product(Product::new("Chair", Decimal::from(100)))?;
    let wood = store.insert_raw_material(RawMaterial::new("Wood", 50))?;
    let screw = store.insert_raw_material(RawMaterial::new("Screw", 12))?;

    println!("原料庫存:");
    for material in store.raw_materials() {
        println!("  - {}: {}", material.name, material.stock_quantity);
    }

    // 掛上配方：一張椅子需要 5 個木料、2 個螺絲
    let service = PlanningService::new(store);
    service.add_recipe_entry(
        chair.id,
        RecipeEntryRequest {
            raw_material_id: wood.id,
            required_quantity: 5,
        },
    )?;
    service.add_recipe_entry(
        chair.id,
        RecipeEntryRequest {
            raw_material_id: screw.id,
            required_quantity: 2,
        },
    )?;

    println!("\n配方:");
    for entry in service.get_recipe(chair.id)? {
        println!(
            "  - {} ← {} x {}",
            entry.product_name, entry.raw_material_name, entry.required_quantity
        );
    }

    // 計算生產建議：瓶頸為螺絲，floor(12/2) = 6
    let result = service.get_suggestions();

    println!("\n生產建議:");
    for suggestion in &result.suggestions {
        println!(
            "  - {}: {} 件，總價值 {}",
            suggestion.product_name, suggestion.quantity, suggestion.total_value
        );
    }
    println!("建議總價值: {}", result.grand_total_value);

    println!("\nJSON 輸出:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
