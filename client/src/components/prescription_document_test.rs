use super::*;

#[test]
fn reference_uses_last_six_alphanumerics() {
    assert_eq!(reference("3f2a-91bc-77de"), "ORDX-BC77DE");
    assert_eq!(reference("ab"), "ORDX-AB");
    assert_eq!(reference(""), "ORDX-");
}
