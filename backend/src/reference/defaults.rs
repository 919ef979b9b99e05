//! Built-in reference tables
//!
//! Fee schedules mirror the public seller-fee pages of each marketplace at
//! the time they were captured; hosts override them with their own bundle
//! whenever a marketplace changes its fees.

use crate::models::fee_tier::{FeeTier, MarketplacePlatform};
use crate::models::location::{City, RouteDistance};

/// (tier_id, name, admin %, payment %, free-shipping %)
type TierRow = (&'static str, &'static str, f64, f64, f64);

const SHOPEE_TIERS: &[TierRow] = &[
    ("regular", "Non-Star", 6.5, 1.8, 4.0),
    ("star", "Star / Star+", 7.5, 1.8, 4.0),
    ("mall", "Shopee Mall", 9.5, 1.8, 4.0),
];

const TOKOPEDIA_TIERS: &[TierRow] = &[
    ("regular", "Regular Merchant", 4.75, 1.0, 0.0),
    ("power", "Power Merchant", 6.5, 1.0, 4.0),
    ("official", "Official Store", 8.0, 1.0, 4.0),
];

const TIKTOK_SHOP_TIERS: &[TierRow] = &[
    ("regular", "Regular", 5.0, 1.0, 0.0),
    ("mall", "TikTok Shop Mall", 7.5, 1.0, 4.0),
];

const LAZADA_TIERS: &[TierRow] = &[
    ("regular", "Regular", 5.5, 1.82, 0.0),
    ("lazmall", "LazMall", 8.0, 1.82, 4.0),
];

const BLIBLI_TIERS: &[TierRow] = &[("regular", "Regular", 5.0, 1.5, 0.0)];

fn platform(platform_id: &str, name: &str, rows: &[TierRow]) -> MarketplacePlatform {
    let tiers = rows
        .iter()
        .filter_map(|(id, label, admin, payment, free_shipping)| {
            FeeTier::new(*id, *label, *admin, *payment, Some(*free_shipping)).ok()
        })
        .collect();
    MarketplacePlatform::from_parts(platform_id, name, tiers)
}

pub fn marketplace_platforms() -> Vec<MarketplacePlatform> {
    vec![
        platform("shopee", "Shopee", SHOPEE_TIERS),
        platform("tokopedia", "Tokopedia", TOKOPEDIA_TIERS),
        platform("tiktok-shop", "TikTok Shop", TIKTOK_SHOP_TIERS),
        platform("lazada", "Lazada", LAZADA_TIERS),
        platform("blibli", "Blibli", BLIBLI_TIERS),
    ]
}

pub fn cities() -> Vec<City> {
    vec![
        City::new("jakarta", "Jakarta", "DKI Jakarta", -6.2088, 106.8456),
        City::new("bogor", "Bogor", "Jawa Barat", -6.5971, 106.8060),
        City::new("tangerang", "Tangerang", "Banten", -6.1783, 106.6319),
        City::new("bekasi", "Bekasi", "Jawa Barat", -6.2383, 106.9756),
        City::new("bandung", "Bandung", "Jawa Barat", -6.9175, 107.6191),
        City::new("semarang", "Semarang", "Jawa Tengah", -6.9667, 110.4167),
        City::new("yogyakarta", "Yogyakarta", "DI Yogyakarta", -7.7956, 110.3695),
        City::new("surakarta", "Surakarta", "Jawa Tengah", -7.5755, 110.8243),
        City::new("surabaya", "Surabaya", "Jawa Timur", -7.2575, 112.7521),
        City::new("malang", "Malang", "Jawa Timur", -7.9666, 112.6326),
        City::new("denpasar", "Denpasar", "Bali", -8.6705, 115.2126),
        City::new("medan", "Medan", "Sumatera Utara", 3.5952, 98.6722),
        City::new("palembang", "Palembang", "Sumatera Selatan", -2.9761, 104.7754),
        City::new("pekanbaru", "Pekanbaru", "Riau", 0.5071, 101.4478),
        City::new("padang", "Padang", "Sumatera Barat", -0.9471, 100.4172),
        City::new("bandar-lampung", "Bandar Lampung", "Lampung", -5.3971, 105.2668),
        City::new("pontianak", "Pontianak", "Kalimantan Barat", -0.0263, 109.3425),
        City::new("balikpapan", "Balikpapan", "Kalimantan Timur", -1.2379, 116.8529),
        City::new("banjarmasin", "Banjarmasin", "Kalimantan Selatan", -3.3186, 114.5944),
        City::new("makassar", "Makassar", "Sulawesi Selatan", -5.1477, 119.4327),
        City::new("manado", "Manado", "Sulawesi Utara", 1.4748, 124.8421),
        City::new("jayapura", "Jayapura", "Papua", -2.5337, 140.7181),
    ]
}

/// Road distances (km) for the busiest Java/Sumatra/Bali linehauls
pub fn routes() -> Vec<RouteDistance> {
    [
        ("jakarta", "bogor", 56.0),
        ("jakarta", "tangerang", 27.0),
        ("jakarta", "bekasi", 28.0),
        ("jakarta", "bandung", 150.0),
        ("jakarta", "semarang", 445.0),
        ("jakarta", "yogyakarta", 560.0),
        ("jakarta", "surakarta", 550.0),
        ("jakarta", "surabaya", 780.0),
        ("jakarta", "malang", 850.0),
        ("jakarta", "bandar-lampung", 235.0),
        ("jakarta", "palembang", 575.0),
        ("bandung", "semarang", 365.0),
        ("bandung", "yogyakarta", 395.0),
        ("semarang", "yogyakarta", 120.0),
        ("semarang", "surakarta", 100.0),
        ("semarang", "surabaya", 350.0),
        ("yogyakarta", "surakarta", 65.0),
        ("yogyakarta", "surabaya", 325.0),
        ("surabaya", "malang", 95.0),
        ("surabaya", "denpasar", 415.0),
        ("medan", "pekanbaru", 615.0),
        ("medan", "padang", 710.0),
        ("pekanbaru", "padang", 310.0),
        ("palembang", "bandar-lampung", 360.0),
        ("balikpapan", "banjarmasin", 515.0),
    ]
    .into_iter()
    .map(|(a, b, km)| RouteDistance::new(a, b, km))
    .collect()
}
