// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1303560
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        9180
// Flush:           5112
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  32
// Royal Flush:     4
// ```

use std::time::Instant;

use pokerhands_eval::*;

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::RANKABLE.len()];

    Deck::default().for_each(5, |hand| {
        if let Some(ordinal) = classify(hand).category().ordinal() {
            counts[ordinal as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (category, count) in Category::RANKABLE.iter().zip(counts) {
        println!("{:<17}{count}", format!("{category}:"));
    }
}
