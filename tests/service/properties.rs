//! Filter properties checked against the full list.

use product_catalog::{InMemoryProductStore, Product, ProductDraft, ProductService};
use proptest::prelude::*;

fn seeded(items: &[(f64, bool)]) -> (tokio::runtime::Runtime, ProductService<InMemoryProductStore>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let service = ProductService::new(InMemoryProductStore::new());
    runtime.block_on(async {
        for (i, (price, in_stock)) in items.iter().enumerate() {
            service
                .create(ProductDraft::new(format!("p{i}"), "", *price, *in_stock))
                .await
                .unwrap();
        }
    });
    (runtime, service)
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn stock_filter_partitions_the_list(
        items in prop::collection::vec((0.0f64..1000.0, any::<bool>()), 0..24)
    ) {
        let (runtime, service) = seeded(&items);
        runtime.block_on(async {
            let all = service.list_all().await.unwrap();
            let in_stock = service.list_by_stock(true).await.unwrap();
            let out_of_stock = service.list_by_stock(false).await.unwrap();

            let expected_in: Vec<Product> = all.iter().filter(|p| p.in_stock).cloned().collect();
            let expected_out: Vec<Product> = all.iter().filter(|p| !p.in_stock).cloned().collect();
            assert_eq!(in_stock, expected_in);
            assert_eq!(out_of_stock, expected_out);

            let mut union = ids(&in_stock);
            union.extend(ids(&out_of_stock));
            union.sort();
            assert_eq!(union, ids(&all));
        });
    }

    #[test]
    fn min_price_filter_is_exact_subset(
        items in prop::collection::vec((0.0f64..1000.0, any::<bool>()), 0..24),
        min_price in 0.0f64..1000.0,
    ) {
        let (runtime, service) = seeded(&items);
        runtime.block_on(async {
            let all = service.list_all().await.unwrap();
            let above = service.list_by_min_price(min_price).await.unwrap();

            let expected: Vec<Product> =
                all.iter().filter(|p| p.price >= min_price).cloned().collect();
            assert_eq!(above, expected);

            assert_eq!(service.list_by_min_price(0.0).await.unwrap(), all);
        });
    }
}
