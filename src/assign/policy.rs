/// Most calls one person may make in a group of `n`
/// Stays at or below (n - 1) / 2 for n >= 3 so the rotation fallback always fits
pub fn max_per_person(n: usize) -> usize {
    match n {
        0..=4 => 1,
        5..=7 => 2,
        8..=10 => 3,
        11..=15 => 4,
        16..=20 => 5,
        _ => n / 4,
    }
}

/// Largest allowed gap between the most-called and least-called person
pub fn balance_tolerance(n: usize) -> usize {
    match n {
        0..=6 => 1,
        7..=12 => 2,
        _ => 3,
    }
}

/// How many randomized constructions to try before giving up
pub fn attempt_budget(n: usize) -> usize {
    n.saturating_mul(50).clamp(200, 2000)
}

/// Upper bound on one-way edges: each unordered pair contributes at most one
/// Saturates at usize::MAX for groups too large to count
pub fn max_one_way_pairs(n: usize) -> usize {
    let below = n.saturating_sub(1);
    // Halve the even factor first so the product stays exact
    let (a, b) = if n % 2 == 0 { (n / 2, below) } else { (n, below / 2) };
    a.saturating_mul(b)
}

/// Calls actually made per person once the request is clamped to the group size
pub fn effective_count(n: usize, requested: usize) -> usize {
    requested.min(n.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_person_cap_never_decreases() {
        for n in 2..200 {
            assert!(max_per_person(n + 1) >= max_per_person(n), "cap dropped at n={}", n);
        }
    }

    #[test]
    fn per_person_cap_leaves_room_for_rotation() {
        for n in 3..200 {
            assert!(max_per_person(n) <= (n - 1) / 2, "cap too high at n={}", n);
        }
    }

    #[test]
    fn eleven_people_cannot_make_five_calls() {
        assert_eq!(max_per_person(11), 4);
    }

    #[test]
    fn budget_grows_with_group_size() {
        assert_eq!(attempt_budget(3), 200);
        assert_eq!(attempt_budget(10), 500);
        assert_eq!(attempt_budget(100), 2000);
        assert_eq!(max_one_way_pairs(11), 55);
        assert_eq!(max_one_way_pairs(0), 0);
    }

    #[test]
    fn pair_count_matches_formula_and_saturates() {
        for n in 0..200 {
            assert_eq!(max_one_way_pairs(n), n * n.saturating_sub(1) / 2, "n={}", n);
        }
        assert_eq!(max_one_way_pairs(usize::MAX), usize::MAX);
    }

    #[test]
    fn effective_count_is_clamped_to_others() {
        assert_eq!(effective_count(5, 10), 4);
        assert_eq!(effective_count(5, 2), 2);
        assert_eq!(effective_count(3, 2), 2);
        assert_eq!(effective_count(0, 3), 0);
    }
}
