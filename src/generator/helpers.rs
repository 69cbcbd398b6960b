/// Stable address hash: the sum of each lower-cased character's code point
/// weighted by its 1-based position.
pub fn hash_address(address: &str) -> u64 {
    address
        .to_lowercase()
        .chars()
        .enumerate()
        .map(|(i, c)| c as u64 * (i as u64 + 1))
        .sum()
}

/// Last two comma-separated parts of the address ("City, ST"), or the whole
/// address when it has no comma.
pub fn display_location(address: &str) -> String {
    if !address.contains(',') {
        return address.to_string();
    }
    let parts: Vec<&str> = address.split(',').collect();
    parts[parts.len().saturating_sub(2)..]
        .iter()
        .map(|part| part.trim())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_weights_by_position() {
        assert_eq!(hash_address("ab"), 97 + 98 * 2);
        assert_eq!(hash_address("AB"), hash_address("ab"));
        assert_eq!(hash_address(""), 0);
    }

    #[test]
    fn location_keeps_last_two_parts() {
        assert_eq!(display_location("123 Main St, Austin, TX"), "Austin, TX");
        assert_eq!(display_location("Austin ,TX"), "Austin, TX");
        assert_eq!(display_location("42 Nowhere Lane"), "42 Nowhere Lane");
    }
}
