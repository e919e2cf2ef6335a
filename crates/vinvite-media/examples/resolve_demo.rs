//! Demo: Media Source Resolution
//!
//! Run with: cargo run -p vinvite-media --example resolve_demo

use vinvite_media::{MediaReference, Platform, VideoSourceResolver};

fn main() {
    let catalog = [
        MediaReference::new("/videos/haldi-teaser.mp4"),
        MediaReference::new("https://youtu.be/dQw4w9WgXcQ?t=30"),
        MediaReference::new("https://www.youtube.com/shorts/abc123def45"),
        MediaReference::new("http://instagram.com/p/CxYzAb/?igsh=share"),
        MediaReference::new("https://in.pinterest.com/pin/987654321/"),
        MediaReference::new("https://pin.it/AbCdEf"),
        MediaReference::new("https://cdn.example.com/w/123").with_platform(Platform::YouTube),
        MediaReference::new("http://[not-a-url"),
    ];

    let resolver = VideoSourceResolver::default();

    for media in catalog {
        println!("\n{}", "=".repeat(60));
        println!("INPUT: {}", media.url);
        println!("{}", "=".repeat(60));

        let resolved = resolver.resolve(&media);

        println!("strategy: {}", resolved.render_strategy().as_str());
        println!(
            "{}",
            resolved
                .to_json_pretty()
                .expect("serialization should be infallible")
        );
    }
}
