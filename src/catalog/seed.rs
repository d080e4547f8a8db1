//! Built-in electronics dataset used to seed a fresh catalog.

use super::models::Product;
use super::store::SqliteCatalog;
use crate::error::Result;
use tracing::info;

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    image_url: &str,
    description: &str,
    amazon_price: f64,
    flipkart_price: f64,
    amazon_url: &str,
    flipkart_url: &str,
    specs: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        description: description.to_string(),
        amazon_price,
        flipkart_price,
        amazon_url: amazon_url.to_string(),
        flipkart_url: flipkart_url.to_string(),
        specs: specs.iter().map(|s| s.to_string()).collect(),
    }
}

/// Returns the seed catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        listing(
            "iphone-15",
            "Apple iPhone 15 (128GB) - Black",
            "https://m.media-amazon.com/images/I/71657UrqKnL._SX679_.jpg",
            "The latest iPhone featuring the Dynamic Island, 48MP Main camera, and USB-C.",
            71490.0,
            70999.0,
            "https://www.amazon.in/Apple-iPhone-15-128-GB/dp/B0CHX2F5QT",
            "https://www.flipkart.com/apple-iphone-15-black-128-gb/p/itm6bc647548a1d6",
            &[
                "6.1-inch Super Retina XDR display",
                "A16 Bionic chip with 5-core GPU",
                "48MP Main + 12MP Ultra Wide camera",
                "USB-C Interface",
                "All-day battery life (up to 20h video)",
            ],
        ),
        listing(
            "s24-ultra",
            "Samsung Galaxy S24 Ultra (256GB Platinum)",
            "https://m.media-amazon.com/images/I/71RVuS3q9LS._SX679_.jpg",
            "Elite smartphone with Galaxy AI, Titanium frame, and 200MP camera system.",
            129999.0,
            128500.0,
            "https://www.amazon.in/Samsung-Galaxy-Ultra-Digital-Titanium/dp/B0CS5X6B6M",
            "https://www.flipkart.com/samsung-galaxy-s24-ultra-titanium-gray-256-gb/p/itmae7d605177267",
            &[
                "6.8-inch QHD+ Dynamic AMOLED 2X",
                "Snapdragon 8 Gen 3 for Galaxy",
                "200MP Quad Telephoto System",
                "Integrated S Pen",
                "Titanium Frame",
            ],
        ),
        listing(
            "macbook-m3",
            "Apple MacBook Air M3 (13-inch, 2024)",
            "https://m.media-amazon.com/images/I/71f5Eu5lJSL._SX679_.jpg",
            "Thinner, lighter, and faster laptop with the powerful M3 chip.",
            114900.0,
            113500.0,
            "https://www.amazon.in/Apple-2024-MacBook-13-inch-Laptop/dp/B0CX27R79R",
            "https://www.flipkart.com/apple-macbook-air-m3-8-gb-256-gb-ssd-macos-sonoma-mryu3hn-a/p/itm77c6178822502",
            &[
                "M3 chip with 8-core CPU/8-core GPU",
                "13.6-inch Liquid Retina display",
                "8GB Unified Memory, 256GB SSD",
                "Up to 18 hours battery life",
                "1080p FaceTime HD camera",
            ],
        ),
        listing(
            "sony-xm5",
            "Sony WH-1000XM5 Noise Cancelling Headphones",
            "https://m.media-amazon.com/images/I/516V7S6A8JL._SX679_.jpg",
            "Industry-leading noise cancellation with exceptional sound quality.",
            29990.0,
            28990.0,
            "https://www.amazon.in/Sony-WH-1000XM5-Wireless-Cancelling-Headphones/dp/B0B5GHX679",
            "https://www.flipkart.com/sony-wh-1000xm5-industry-leading-noise-cancelling-headphones-30-hr-battery-bluetooth-headset/p/itm8d408f6578a1f",
            &[
                "Multiple noise sensor technology",
                "Integrated Processor V1",
                "30-hour battery life (Quick Charge)",
                "Precise Voice Pickup technology",
                "Smart listening features",
            ],
        ),
        listing(
            "ipad-air",
            "Apple iPad Air M2 (11-inch, 128GB)",
            "https://m.media-amazon.com/images/I/61SNAmpxMGL._SX679_.jpg",
            "Powerful and versatile tablet for creativity and productivity.",
            59900.0,
            58490.0,
            "https://www.amazon.in/Apple-iPad-Air-11-inch-Wi-Fi-128GB/dp/B0D3JN8QY3",
            "https://www.flipkart.com/apple-ipad-air-m2-128-gb-rom-11-inch-with-wi-fi-blue/p/itm234674720612d",
            &[
                "11-inch Liquid Retina display",
                "Apple M2 chip",
                "12MP Landscape Ultra Wide front camera",
                "Apple Pencil Pro compatible",
                "USB-C charging",
            ],
        ),
        listing(
            "dell-xps",
            "Dell XPS 13 Laptop (9340)",
            "https://m.media-amazon.com/images/I/61O+Uu0iJ5L._SX679_.jpg",
            "The ultimate portable powerhouse with the latest Intel processors.",
            139990.0,
            137500.0,
            "https://www.amazon.in/Dell-XPS-9340-Ultra-5-125H-33-02cm/dp/B0D1XMKMSH",
            "https://www.flipkart.com/dell-xps-13-intel-core-ultra-5-16-gb-512-gb-ssd-windows-11-home-9340-laptop/p/itmd7549887754fb",
            &[
                "Intel Core Ultra 5-125H Processor",
                "13.4-inch FHD+ InfinityEdge display",
                "16GB LPDDR5x RAM, 512GB SSD",
                "Intel Arc Graphics",
                "Machined Aluminum Chassis",
            ],
        ),
        listing(
            "ps5-slim",
            "Sony PlayStation 5 Slim (CFI-2000)",
            "https://m.media-amazon.com/images/I/41mbiBwTojL._SY445_SX342_.jpg",
            "Unleash new gaming possibilities with the thinner PS5 model.",
            54990.0,
            53990.0,
            "https://www.amazon.in/Sony-PlayStation-5-Console-Slim/dp/B0D1YF8BCC",
            "https://www.flipkart.com/sony-ps5-slim-cfi-2000-console-disc-edition-1-tb/p/itm3d7549887754fb",
            &[
                "1TB Ultra-High Speed SSD",
                "Integrated I/O with Ray Tracing",
                "4K-TV Gaming support",
                "Haptic Feedback via DualSense",
                "Slimmer design with Disc Drive",
            ],
        ),
        listing(
            "canon-r50",
            "Canon EOS R50 Mirrorless Camera",
            "https://m.media-amazon.com/images/I/61N60-6H6kL._SX679_.jpg",
            "Compact mirrorless camera for capturing sharp photos and 4K videos.",
            71990.0,
            70500.0,
            "https://www.amazon.in/Canon-R50-Mirrorless-Camera-18-45mm/dp/B0BW6G2YQ7",
            "https://www.flipkart.com/canon-eos-r50-mirrorless-camera-body-with-18-45-mm-lens/p/itma7c6178822502",
            &[
                "24.2 MP APS-C CMOS sensor",
                "DIGIC X Image Processor",
                "4K Uncropped 30p video",
                "Dual Pixel CMOS AF II",
                "Compact and lightweight design",
            ],
        ),
        listing(
            "amazfit-gtr4",
            "Amazfit GTR 4 Smart Watch",
            "https://m.media-amazon.com/images/I/61j6X2f72BL._SX679_.jpg",
            "Sports health tracker with dual-band GPS and 14-day battery.",
            16999.0,
            15999.0,
            "https://www.amazon.in/Amazfit-GTR-Smartwatch-Dual-band-Storage/dp/B0BBFMG9V3",
            "https://www.flipkart.com/amazfit-gtr-4-smartwatch-1-43-inch-amoled-display-dual-band-gps-150-sports-modes/p/itm3d7549887754fb",
            &[
                "1.43\" AMOLED display",
                "Dual-band circular-polarized GPS",
                "BioTracker 4.0 PPG Biometric Sensor",
                "14-day battery life",
                "150+ Sports Modes",
            ],
        ),
        listing(
            "bose-qc-ultra",
            "Bose QuietComfort Ultra Earbuds",
            "https://m.media-amazon.com/images/I/51w7pM9jKJL._SX679_.jpg",
            "The ultimate noise-cancelling earbuds with world-class performance.",
            25900.0,
            24500.0,
            "https://www.amazon.in/Bose-QuietComfort-Ultra-Bluetooth-Earbuds-Cancelling/dp/B0CH2S6B8N",
            "https://www.flipkart.com/bose-quietcomfort-ultra-earbuds-world-class-noise-cancelling-spatial-audio-bluetooth-headset/p/itm3d7549887754fb",
            &[
                "CustomTune technology",
                "World-class noise cancellation",
                "Spatial Audio (Immersive Audio)",
                "6-hour battery life (24h with case)",
                "SimpleTouch controls",
            ],
        ),
    ]
}

/// Creates the schema and upserts the seed catalog. Returns the number of products stored.
pub async fn seed(catalog: &SqliteCatalog) -> Result<usize> {
    catalog.init_schema().await?;

    let products = seed_products();
    catalog.upsert(&products).await?;

    info!("Catalog seeded with {} products", products.len());
    Ok(products.len())
}
