//! Seed rows mirroring `migrations/0002_seed.sql`.

use chrono::{TimeZone, Utc};

use super::Tables;
use crate::domain::{Category, Product};

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const CATEGORIES: &[&str] = &["Books", "Eletronics", "Computers"];

struct SeedProduct {
    name: &'static str,
    price: f64,
    day: u32,
    categories: &'static [i64],
}

#[rustfmt::skip]
const PRODUCTS: &[SeedProduct] = &[
    SeedProduct { name: "The Lord of the Rings", price: 90.5, day: 2, categories: &[1] },
    SeedProduct { name: "Smart TV", price: 2190.0, day: 3, categories: &[2, 3] },
    SeedProduct { name: "Macbook Pro", price: 1250.0, day: 4, categories: &[3] },
    SeedProduct { name: "PC Gamer", price: 1200.0, day: 5, categories: &[3] },
    SeedProduct { name: "Rails for Dummies", price: 100.99, day: 6, categories: &[1] },
    SeedProduct { name: "PC Gamer Ex", price: 1350.0, day: 7, categories: &[3] },
    SeedProduct { name: "PC Gamer X", price: 1350.0, day: 8, categories: &[3] },
    SeedProduct { name: "PC Gamer Alfa", price: 1850.0, day: 9, categories: &[3] },
    SeedProduct { name: "PC Gamer Tera", price: 1950.0, day: 10, categories: &[3] },
    SeedProduct { name: "PC Gamer Y", price: 1700.0, day: 11, categories: &[3] },
    SeedProduct { name: "PC Gamer Nitro", price: 1450.0, day: 12, categories: &[3] },
    SeedProduct { name: "PC Gamer Card", price: 1850.0, day: 13, categories: &[3] },
    SeedProduct { name: "PC Gamer Plus", price: 1350.0, day: 14, categories: &[3] },
    SeedProduct { name: "PC Gamer Hera", price: 2250.0, day: 15, categories: &[3] },
    SeedProduct { name: "PC Gamer Weed", price: 2200.0, day: 16, categories: &[3] },
    SeedProduct { name: "PC Gamer Max", price: 2340.0, day: 17, categories: &[3] },
    SeedProduct { name: "PC Gamer Turbo", price: 1280.0, day: 18, categories: &[3] },
    SeedProduct { name: "PC Gamer Hot", price: 1450.0, day: 19, categories: &[3] },
    SeedProduct { name: "PC Gamer Ez", price: 1750.0, day: 20, categories: &[3] },
    SeedProduct { name: "PC Gamer Tr", price: 1650.0, day: 21, categories: &[3] },
    SeedProduct { name: "PC Gamer Tx", price: 1680.0, day: 22, categories: &[3] },
    SeedProduct { name: "PC Gamer Er", price: 1850.0, day: 23, categories: &[3] },
    SeedProduct { name: "PC Gamer Min", price: 2250.0, day: 24, categories: &[3] },
    SeedProduct { name: "PC Gamer Boo", price: 2350.0, day: 25, categories: &[3] },
    SeedProduct { name: "PC Gamer Foo", price: 4170.0, day: 26, categories: &[3] },];

pub(super) fn load(tables: &mut Tables) {
    let now = Utc::now();

    for name in CATEGORIES {
        let id = tables.next_category_id();
        tables.categories.insert(
            id,
            Category {
                id: Some(id),
                name: (*name).to_string(),
                created_at: Some(now),
                updated_at: Some(now),
            },
        );
    }

    for seed in PRODUCTS {
        let id = tables.next_product_id();
        let mut product = Product {
            id: Some(id),
            name: seed.name.to_string(),
            description: DESCRIPTION.to_string(),
            price: seed.price,
            img_url: format!("https://img.example.com/{}-big.jpg", id),
            date: Utc.with_ymd_and_hms(2020, 7, seed.day, 10, 0, 0).single(),
            categories: Vec::new(),
        };
        for category_id in seed.categories {
            product.add_category(Category::reference(*category_id));
        }
        tables.products.insert(id, product);
    }
}
