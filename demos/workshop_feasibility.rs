//! 工坊情境示例：多產品共用原料、配方編輯、庫存調整

use rust_decimal::Decimal;

use ctp::{
    ErrorKind, InMemoryPlanningStore, PlanningService, Product, RawMaterial, RecipeEntryRequest,
};

fn print_suggestions(service: &PlanningService<InMemoryPlanningStore>) {
    let result = service.get_suggestions();
    println!("生產建議（{} 項）:", result.suggestions.len());
    for suggestion in &result.suggestions {
        println!(
            "  - {:<8} 單價 {:>7}  可生產 {:>3} 件  總價值 {:>9}",
            suggestion.product_name,
            suggestion.unit_value,
            suggestion.quantity,
            suggestion.total_value
        );
    }
    println!("建議總價值: {}\n", result.grand_total_value);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 工坊生產可行性示例 ===\n");

    let store = InMemoryPlanningStore::new();

    let chair = store.insert_product(Product::new("Chair", Decimal::from(100)))?;
    let table = store.insert_product(Product::new("Table", Decimal::new(24950, 2)))?;
    let shelf = store.insert_product(Product::new("Shelf", Decimal::from(75)))?;

    let wood = store.insert_raw_material(RawMaterial::new("Wood", 50))?;
    let screw = store.insert_raw_material(RawMaterial::new("Screw", 12))?;
    let varnish = store.insert_raw_material(RawMaterial::new("Varnish", 40))?;

    let service = PlanningService::new(store);

    // 三個產品共用木料；各自的估算互不預留庫存
    for (product, material, quantity) in [
        (chair.id, wood.id, 5),
        (chair.id, screw.id, 2),
        (table.id, wood.id, 8),
        (table.id, varnish.id, 4),
        (shelf.id, wood.id, 60), // 庫存不足一件：不會出現在建議中
    ] {
        service.add_recipe_entry(
            product,
            RecipeEntryRequest {
                raw_material_id: material,
                required_quantity: quantity,
            },
        )?;
    }

    print_suggestions(&service);

    // 重複掛載同一對 (產品, 原料) 會被拒絕
    let err = service
        .add_recipe_entry(
            chair.id,
            RecipeEntryRequest {
                raw_material_id: wood.id,
                required_quantity: 3,
            },
        )
        .unwrap_err();
    println!("重複掛載被拒絕: {} (kind: {:?})\n", err, err.kind());
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // 螺絲進貨：瓶頸鬆開
    println!("螺絲進貨 12 → 40 ...\n");
    service.store().set_stock_quantity(screw.id, 40)?;
    service.invalidate_all();
    print_suggestions(&service);

    // 移除桌子配方的最後原料們：桌子自建議中消失
    println!("拆除 Table 的整份配方 ...\n");
    service.remove_recipe_entry(table.id, wood.id)?;
    service.remove_recipe_entry(table.id, varnish.id)?;
    print_suggestions(&service);

    Ok(())
}
