/// Strip all whitespace so declarations compare independent of layout.
pub fn remove_white_space(src: &str) -> String {
    src.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalized declarations, in emission order.
pub fn normalized(interfaces: &[String]) -> Vec<String> {
    interfaces.iter().map(|i| remove_white_space(i)).collect()
}

pub fn expected(decls: &[&str]) -> Vec<String> {
    decls.iter().map(|d| remove_white_space(d)).collect()
}
