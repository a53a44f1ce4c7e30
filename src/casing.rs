//! Mixed-case to snake_case conversion for wrapper method names.

/// Insert an underscore before each uppercase letter and lowercase it, then
/// apply the one conventional exception: `r_o_i` collapses to `roi`.
pub fn snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            snake.push('_');
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake.replace("r_o_i", "roi")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_mixed_case() {
        assert_eq!(snake_case("getSomeValue"), "get_some_value");
        assert_eq!(snake_case("setOperationMode"), "set_operation_mode");
    }

    #[test]
    fn already_lowercase() {
        assert_eq!(snake_case("reboot"), "reboot");
    }

    #[test]
    fn roi_exception() {
        assert_eq!(snake_case("getAutoROI"), "get_auto_roi");
        assert_eq!(snake_case("setROIOffset"), "set_roi_offset");
        assert_eq!(snake_case("getROIEnabled"), "get_roi_enabled");
    }
}
