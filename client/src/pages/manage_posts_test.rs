use super::*;

#[test]
fn form_heading_reflects_edit_target() {
    assert_eq!(form_heading(None), "Tambah Post Baru");
    assert_eq!(form_heading(Some(42)), "Edit Post ID #42");
}

#[test]
fn category_choice_parses_ids_and_defaults_to_none() {
    assert_eq!(parse_category_choice("7"), 7);
    assert_eq!(parse_category_choice(" 12 "), 12);
    assert_eq!(parse_category_choice("0"), 0);
    assert_eq!(parse_category_choice(""), 0);
    assert_eq!(parse_category_choice("abc"), 0);
}

#[test]
fn submit_label_switches_with_edit_mode() {
    assert_eq!(submit_label(None), "Tambah Post");
    assert_eq!(submit_label(Some(3)), "Simpan Perubahan");
}
