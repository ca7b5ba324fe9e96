#![allow(dead_code)]

extern crate std;

/// INV-1: The pool is never negative.
pub fn assert_pool_non_negative(pool: i128) {
    assert!(pool >= 0, "INV-1 violated: negative pool ({})", pool);
}

/// INV-2: Right after a purchase the pool is exactly `price × players`.
pub fn assert_pool_matches_tickets(pool: i128, ticket_price: i128, players: u32) {
    assert_eq!(
        pool,
        ticket_price * i128::from(players),
        "INV-2 violated: pool {} != {} x {}",
        pool,
        ticket_price,
        players
    );
}

/// INV-3: The instance always holds at least the pool in the ticket asset.
pub fn assert_pool_backed(instance_balance: i128, pool: i128) {
    assert!(
        instance_balance >= pool,
        "INV-3 violated: instance holds {} but owes {}",
        instance_balance,
        pool
    );
}

/// INV-4: A surprise payout takes `⌊pool/2⌋` and leaves the rest.
pub fn assert_surprise_split(pool_before: i128, paid: i128, pool_after: i128) {
    assert_eq!(paid, pool_before / 2, "INV-4 violated: paid {} of {}", paid, pool_before);
    assert_eq!(
        pool_after,
        pool_before - paid,
        "INV-4 violated: {} - {} != {}",
        pool_before,
        paid,
        pool_after
    );
}

/// INV-5: A final payout leaves no players and an empty pool.
pub fn assert_round_drained(players: u32, pool: i128) {
    assert_eq!(players, 0, "INV-5 violated: {} players left after final draw", players);
    assert_eq!(pool, 0, "INV-5 violated: {} left in pool after final draw", pool);
}
