//! Integration tests for section inheritance resolution

mod common;

use common::animals;
use inipp::IniDocument;

#[test]
fn test_child_reads_parent_value() {
    let ini = animals();
    assert_eq!(
        ini.get_value("kitten", "legs", 0),
        ini.get_value("cat", "legs", 0)
    );
    assert_eq!(ini.get_value("kitten", "legs", 0), 4);
}

#[test]
fn test_child_value_shadows_ancestors() {
    let ini = animals();
    assert_eq!(ini.get_value("kitten", "weight_in_kilograms", 0.0f32), 1.2);
    assert_eq!(ini.get_value("cat", "weight_in_kilograms", 0.0f32), 4.5);
    assert_eq!(ini.get_value("spider", "legs", 0), 8);
    assert_eq!(ini.get_string("cat", "diet"), "Carnivore");
    assert_eq!(ini.get_string("spider", "diet"), "Omnivore");
}

#[test]
fn test_effective_keys_span_whole_chain() {
    let ini = animals();
    assert_eq!(
        ini.effective_keys("kitten"),
        vec![
            "alive",
            "diet",
            "legs",
            "name",
            "tags",
            "weight_in_kilograms",
            "whiskers"
        ]
    );
    assert_eq!(ini.effective_keys("spider"), vec!["alive", "diet", "legs"]);
}

#[test]
fn test_kitten_inherits_from_cat() {
    let ini = IniDocument::parse("[cat]\nlegs=4\n[kitten:cat]\nweight=1.2\n");
    assert_eq!(ini.get_value("kitten", "legs", 0i32), 4);
    assert_eq!(ini.get_value("kitten", "weight", 0.0f64), 1.2);
    assert_eq!(ini.effective_keys("kitten"), vec!["legs", "weight"]);
}

#[test]
fn test_two_section_cycle_terminates() {
    let ini = IniDocument::parse("[a:b]\nx=1\n[b:a]\ny=2\n");

    assert_eq!(ini.get_value("a", "missing", -1), -1);
    assert!(!ini.value_exists("a", "missing"));
    assert_eq!(ini.effective_keys("a"), vec!["x", "y"]);
    assert_eq!(ini.effective_keys("b"), vec!["x", "y"]);
    assert_eq!(ini.get_value("a", "y", 0), 2);
    assert_eq!(ini.get_value("b", "x", 0), 1);
}

#[test]
fn test_long_cycle_terminates() {
    let mut text = String::new();
    for i in 0..50 {
        text.push_str(&format!("[s{}:s{}]\nk{}={}\n", i, (i + 1) % 50, i, i));
    }
    let ini = IniDocument::parse(&text);

    assert_eq!(ini.effective_keys("s0").len(), 50);
    assert_eq!(ini.get_value("s0", "k49", 0), 49);
    assert_eq!(ini.read_raw("s10", "nothing"), None);
}

#[test]
fn test_abstract_sections_hidden_but_usable() {
    let mut ini = animals();
    assert_eq!(ini.sections(false), vec!["cat", "kitten", "spider"]);
    assert_eq!(
        ini.sections(true),
        vec!["_animal", "_feline", "cat", "kitten", "spider"]
    );

    assert!(ini.is_section_abstract("_feline"));
    assert_eq!(ini.get_value("_feline", "whiskers", 0), 24);
    assert_eq!(ini.parent_of("cat"), Some("_feline"));

    assert!(ini.set_value("_feline", "whiskers", &20));
    assert_eq!(ini.get_value("kitten", "whiskers", 0), 20);
}

#[test]
fn test_writes_never_reach_ancestors() {
    let mut ini = animals();
    assert!(ini.set_value("kitten", "legs", &3));

    assert_eq!(ini.get_value("kitten", "legs", 0), 3);
    assert_eq!(ini.get_value("cat", "legs", 0), 4);
    assert_eq!(ini.section("_animal").unwrap().get("legs"), Some("4"));
}

#[test]
fn test_removing_own_value_reveals_inherited_one() {
    let mut ini = animals();
    assert!(ini.remove_value("kitten", "weight_in_kilograms"));
    assert_eq!(ini.get_value("kitten", "weight_in_kilograms", 0.0f32), 4.5);
}

#[test]
fn test_redeclared_header_keeps_first_parent() {
    let ini = IniDocument::parse("[p1]\nk=one\n[p2]\nk=two\n[c:p1]\n[c:p2]\nextra=1\n");
    assert_eq!(ini.parent_of("c"), Some("p1"));
    assert_eq!(ini.get_string("c", "k"), "one");
    assert_eq!(ini.get_value("c", "extra", 0), 1);
}

#[test]
fn test_case_insensitive_names_throughout() {
    let ini = IniDocument::parse("[Base]\nColor=Red\n[Derived : BASE]\n");
    assert_eq!(ini.get_string("DERIVED", "color"), "Red");
    assert_eq!(ini.parent_of("derived"), Some("base"));
}

#[test]
fn test_ancestor_chain_is_public() {
    let ini = animals();
    let chain: Vec<&str> = ini.ancestors("kitten").map(|(name, _)| name).collect();
    assert_eq!(chain, vec!["kitten", "cat", "_feline", "_animal"]);
}
