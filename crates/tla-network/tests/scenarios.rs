//! End-to-end builds over realistic city lists.

use tla_network::{
    AssignmentEngine, Code, SearchOptions, build_network, generate_valid_tlas, is_valid_code,
    parse_names,
};

const CAPITALS: &[&str] = &[
    "AMSTERDAM",
    "ATHENS",
    "BERLIN",
    "BERN",
    "BRATISLAVA",
    "BRUSSELS",
    "BUCHAREST",
    "BUDAPEST",
    "COPENHAGEN",
    "DUBLIN",
    "HELSINKI",
    "KYIV",
    "LISBON",
    "LJUBLJANA",
    "LONDON",
    "LUXEMBOURG",
    "MADRID",
    "OSLO",
    "PARIS",
    "PRAGUE",
    "REYKJAVIK",
    "RIGA",
    "ROME",
    "SOFIA",
    "STOCKHOLM",
    "TALLINN",
    "VIENNA",
    "VILNIUS",
    "WARSAW",
    "ZAGREB",
];

/// A city that has at least one code no other city accepts.
fn has_exclusive_code(names: &[&str], city: &str) -> bool {
    let parsed = parse_names(&[city]).unwrap();
    generate_valid_tlas(&parsed[0]).iter().any(|code| {
        is_valid_code(city, code.as_str())
            && names
                .iter()
                .all(|other| *other == city || !is_valid_code(other, code.as_str()))
    })
}

#[test]
fn capitals_network_is_consistent_and_maximal() {
    let network = build_network(CAPITALS).unwrap();
    assert!(network.check_rep(), "{:?}", network.violations());

    let expected: Vec<&str> = CAPITALS
        .iter()
        .copied()
        .filter(|city| has_exclusive_code(CAPITALS, city))
        .collect();
    let assigned: Vec<&str> = network.iter().map(|e| e.name().as_str()).collect();
    assert_eq!(assigned, expected);
}

#[test]
fn every_assigned_code_is_unique_and_own() {
    let network = build_network(CAPITALS).unwrap();
    let mut codes: Vec<Code> = network.iter().map(|e| e.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), network.len());
    for entry in &network {
        assert!(entry.check_rep(), "{} cannot carry {}", entry.name(), entry.code());
    }
}

#[test]
fn bern_and_berlin() {
    // Every code of BERN is a code of BERLIN; BERLIN still has its own.
    let network = build_network(&["BERN", "BERLIN"]).unwrap();
    assert_eq!(network.code_of("BERN"), None);
    let berlin = network.code_of("BERLIN").unwrap();
    assert!(!is_valid_code("BERN", berlin.as_str()));
}

#[test]
fn spaces_are_ignored_for_codes() {
    let network = build_network(&["NEW YORK", "LOS ANGELES", "SAN FRANCISCO"]).unwrap();
    assert_eq!(network.len(), 3);
    assert!(network.check_rep());
    assert!(network.iter().all(|e| !e.code().as_str().contains(' ')));
}

#[test]
fn same_letters_different_spacing_block_each_other() {
    let network = build_network(&["NEW YORK", "NEWYORK", "OSLO"]).unwrap();
    assert_eq!(network.len(), 1);
    assert!(network.code_of("OSLO").is_some());
}

#[test]
fn rebuild_gives_same_network() {
    let first = build_network(CAPITALS).unwrap();
    let second = build_network(CAPITALS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn statistics_account_for_every_city() {
    let names = parse_names(CAPITALS).unwrap();
    let result = AssignmentEngine::new(SearchOptions::default()).run(&names);
    let stats = &result.statistics;
    assert_eq!(stats.cities, CAPITALS.len());
    assert_eq!(stats.duplicates_collapsed, 0);
    assert_eq!(stats.forced_assignments + stats.residual_cities, stats.cities);
    assert_eq!(stats.assigned, result.network.len());
    assert!(!stats.budget_exhausted);
}

#[cfg(feature = "serde")]
#[test]
fn network_serializes_to_json() {
    let network = build_network(&["OSLO"]).unwrap();
    let json = serde_json::to_value(&network).unwrap();
    assert_eq!(json["cities"][0]["name"], "OSLO");
    assert_eq!(json["cities"][0]["code"], network.code_of("OSLO").unwrap().as_str());
}
