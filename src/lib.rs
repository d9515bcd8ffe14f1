//! video-poker: poker hand classification for a five-card draw table
//!
//! - Pure, deterministic classification of a fixed-size hand into one of
//!   ten categories, High Card through Royal Flush
//! - Display names and the standard dealt-hand probability of each category
//! - No panics for invalid input; wrong-sized hands are a `Result` error
//!
//! ## Quick start
//! ```
//! use video_poker::category::Category;
//! use video_poker::classifier::classify;
//! use video_poker::hand::Hand;
//!
//! let hand: Hand = "Kc Kd Kh 4s 4c".parse().unwrap();
//! let category = classify(&hand);
//! assert_eq!(category, Category::FullHouse);
//! assert_eq!(category.to_string(), "Full House");
//! assert_eq!(category.probability(), 0.1441);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin video-poker -- classify As Ks Qs Js Ts
//! cargo run --bin video-poker -- simulate --hands 100000 --seed 7
//! ```

pub mod cards;
pub mod category;
pub mod classifier;
pub mod deck;
pub mod hand;
pub mod probability;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
