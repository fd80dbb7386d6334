// Candidate code generation
//
// Every 3-letter subsequence of the space-stripped name is a candidate. The
// generator does not apply the anchoring rule; callers that need codes a
// city can actually carry filter with `CityName::accepts` (see `valid_codes`).

use hashbrown::HashSet;

use crate::code::{CODE_LEN, Code};
use crate::name::CityName;

/// Enumerate every 3-letter subsequence of `name` (spaces removed).
///
/// The result is a set, so repeated subsequences appear once. Names shorter
/// than three letters have no candidates. Runs in O(n^3) for n letters.
pub fn generate_valid_tlas(name: &CityName) -> HashSet<Code> {
    let letters = name.letters().as_bytes();
    let n = letters.len();
    let mut result = HashSet::new();
    if n < CODE_LEN {
        return result;
    }

    // Each index leaves room for the letters still to be picked.
    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                result.insert(Code::from_letters([letters[i], letters[j], letters[k]]));
            }
        }
    }
    result
}

/// The candidates of `name` that pass the validity rule, in sorted order.
pub fn valid_codes(name: &CityName) -> Vec<Code> {
    let mut codes: Vec<Code> = generate_valid_tlas(name)
        .into_iter()
        .filter(|code| name.accepts(code))
        .collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validity::is_valid_code;
    use proptest::prelude::*;

    fn name(s: &str) -> CityName {
        CityName::new(s).unwrap()
    }

    fn sorted(set: HashSet<Code>) -> Vec<String> {
        let mut v: Vec<String> = set.iter().map(|c| c.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn distinct_letters_give_all_combinations() {
        assert_eq!(
            sorted(generate_valid_tlas(&name("ABCD"))),
            ["ABC", "ABD", "ACD", "BCD"]
        );
        // 7 distinct letters: C(7, 3)
        assert_eq!(generate_valid_tlas(&name("NEW YORK")).len(), 35);
    }

    #[test]
    fn repeated_subsequences_are_deduplicated() {
        assert_eq!(sorted(generate_valid_tlas(&name("AAAA"))), ["AAA"]);
        assert_eq!(
            sorted(generate_valid_tlas(&name("ABAB"))),
            ["AAB", "ABA", "ABB", "BAB"]
        );
    }

    #[test]
    fn short_names_have_no_candidates() {
        assert!(generate_valid_tlas(&name("")).is_empty());
        assert!(generate_valid_tlas(&name("AB")).is_empty());
        assert!(generate_valid_tlas(&name("A B")).is_empty());
        assert_eq!(generate_valid_tlas(&name("A B C")).len(), 1);
    }

    #[test]
    fn generator_over_produces() {
        // ACB is a subsequence of ABCB but crosses the second B.
        let abcb = name("ABCB");
        let code = Code::parse("ACB").unwrap();
        assert!(generate_valid_tlas(&abcb).contains(&code));
        assert!(!valid_codes(&abcb).contains(&code));
    }

    #[test]
    fn valid_codes_are_sorted_and_accepted() {
        let london = name("LONDON");
        let codes = valid_codes(&london);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(codes.iter().all(|c| london.accepts(c)));
        assert!(codes.contains(&Code::parse("LON").unwrap()));
        assert!(!codes.contains(&Code::parse("LLN").unwrap()));
    }

    #[test]
    fn generation_is_repeatable() {
        let city = name("SAN FRANCISCO");
        assert_eq!(generate_valid_tlas(&city), generate_valid_tlas(&city));
    }

    fn all_codes_over(alphabet: &[u8]) -> Vec<String> {
        let mut codes = Vec::new();
        for &a in alphabet {
            for &b in alphabet {
                for &c in alphabet {
                    codes.push(String::from_utf8(vec![a, b, c]).unwrap());
                }
            }
        }
        codes
    }

    proptest! {
        #[test]
        fn every_valid_code_is_generated(raw in "[ABC ]{0,9}") {
            let city = name(&raw);
            let generated = generate_valid_tlas(&city);
            for code in all_codes_over(b"ABC") {
                if is_valid_code(&raw, &code) {
                    prop_assert!(generated.contains(&Code::parse(&code).unwrap()));
                }
            }
        }

        #[test]
        fn generated_codes_use_only_name_letters(raw in "[A-Z ]{0,12}") {
            let city = name(&raw);
            for code in generate_valid_tlas(&city) {
                prop_assert!(code.letters().iter().all(|c| city.letters().contains(*c)));
            }
        }
    }
}
