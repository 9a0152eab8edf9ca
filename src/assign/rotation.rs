/// Builds a rotation assignment over `order`: the person at position i calls
/// the next `per_person` people after them, wrapping around
/// Free of reciprocal pairs whenever 2 * per_person < n, and every in-degree equals per_person
pub fn rotation_assignment(order: &[usize], per_person: usize) -> Option<Vec<Vec<usize>>> {
    let n = order.len();
    if n < 3 || 2 * per_person >= n {
        return None;
    }

    let mut outgoing = vec![Vec::new(); n];
    for (pos, &person) in order.iter().enumerate() {
        outgoing[person] = (1..=per_person).map(|offset| order[(pos + offset) % n]).collect();
    }
    Some(outgoing)
}
