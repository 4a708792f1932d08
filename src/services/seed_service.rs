use rand::{Rng, seq::SliceRandom};

use crate::{error::AppResult, models::NewProduct, repository::ProductRepository};

/// Highest seeded price, 999.99.
pub const MAX_SEED_PRICE: i64 = 99_999;

const PRODUCT_TYPES: &[&str] = &[
    "Backpack", "Blender", "Camera", "Chair", "Headphones", "Jacket", "Kettle", "Keyboard",
    "Lamp", "Mug", "Notebook", "Sneakers", "Speaker", "Sunglasses", "Watch",
];

const SYLLABLES: &[&str] = &[
    "ka", "lo", "mi", "ra", "ten", "vo", "zu", "shi", "pla", "dor", "nex", "qui", "bel", "tor",
];

const DESCRIPTION_WORDS: &[&str] = &[
    "durable", "lightweight", "handcrafted", "premium", "compact", "everyday", "classic",
    "modern", "versatile", "comfortable", "stylish", "design", "quality", "finish", "travel",
    "home", "office", "gift", "materials", "built", "to", "last", "with", "and", "for",
];

/// A made-up brand-ish word, e.g. `Zudor`.
fn generated_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    let syllables = rng.gen_range(2..=3);
    let word: String = (0..syllables)
        .filter_map(|_| SYLLABLES.choose(&mut *rng).copied())
        .collect();
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => word,
    }
}

fn random_description<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(8..=14);
    let words: Vec<&str> = (0..len)
        .filter_map(|_| DESCRIPTION_WORDS.choose(&mut *rng).copied())
        .collect();
    let sentence = words.join(" ");
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_ascii_uppercase(), chars.as_str()),
        None => sentence,
    }
}

pub fn random_product<R: Rng + ?Sized>(rng: &mut R) -> NewProduct {
    let product_type = PRODUCT_TYPES.choose(rng).copied().unwrap_or("Product");
    NewProduct {
        name: format!("{product_type} {}", generated_word(rng)),
        price: rng.gen_range(0..=MAX_SEED_PRICE),
        description: random_description(rng),
        image: String::new(),
    }
}

pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewProduct> {
    (0..count).map(|_| random_product(&mut *rng)).collect()
}

/// Inserts `count` random products and returns how many were written.
pub async fn seed_products(repo: &dyn ProductRepository, count: usize) -> AppResult<usize> {
    let products = generate_products(&mut rand::thread_rng(), count);
    let inserted = repo.create_many(products).await?;
    tracing::info!(count = inserted, "products seeded");
    Ok(inserted)
}
