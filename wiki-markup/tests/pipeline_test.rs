//! Integration tests for the markup → quotes pipeline ([`wiki_markup::extract_quotes`]).
//!
//! Covers the expansion → grammar chain on page-shaped input for both grammars.

use wiki_markup::{expand, extract_quotes, Grammar, QuoteRecord, AUDIO_MARKER, SENTINEL_FILLER};

const AHRI_PAGE: &str = r#"{{Audio page|Ahri}}
== Classic ==
;Pick
:{{sm2|Ahri.pick.ogg|''"Don't you trust me?"''}}
;Movement
* {{sm2|Ahri.move01.ogg}} ''"Lost in the [[Ionia|Ionian]] wilds."''
* {{sm2|Ahri.move02.ogg}} ''"Every step is a dance with {{ci|Wukong|the Monkey King}}."''
* {{sm2|Ahri.move03.ogg}} ''"GG!"''
;Attack
* {{sm2|Ahri.attack01.ogg}} ''"Take {{tt|a breath|It's your last}}, {{sbc|mortal}}."''
* ''"Ahri.attack02.ogg"''
[[File:Ahri_Spirit_Rush.png|20px]] ''"{{ai|Spirit Rush|Ahri|Dash}} with me."''
== Trivia ==
* Her {{RP|1350}} skins include {{csl|Ahri|Arcade}}.
"#;

const KINDRED_PAGE: &str = r#"== Classic ==
;Upon selection
* Lamb: ''"Never one..."''
** Wolf: ''"...without the other."''
;Joke
* Lamb: ''"Wolf, who's next?"''
** Wolf: ''"{{ci|Nasus|The dog}}! I'll eat him.''"
*** Lamb: ''"That's not how it works, Wolf."''
* Wolf: ''"I remember when we hunted {{ui|Baron Nashor}}."''
;Music
* {{sm2|Kindred.music.ogg}}
"#;

fn texts(records: &[QuoteRecord]) -> Vec<String> {
    records.iter().map(QuoteRecord::text).collect()
}

/// **Test: End-to-end scenario for the single-speaker grammar.**
///
/// **Setup:** `{{sbc|ping}}` followed by a quote and the sentinel filler, closing delimiters transposed.
/// **Action:** expand, then extract with the standard grammar.
/// **Expected:** expansion yields `**PING** ...`; extraction yields `["hello"]`.
#[test]
fn test_sbc_then_single_speaker() {
    let raw = r#"{{sbc|ping}} ''"hello''" ''"GG!''""#;
    assert_eq!(expand(raw), r#"**PING** ''"hello''" ''"GG!''""#);
    assert_eq!(texts(&extract_quotes(raw, Grammar::Standard)), vec!["hello"]);
}

/// **Test: Dual-speaker scenario joins nested turns.**
#[test]
fn test_wolf_lamb_exchange() {
    let raw = "* Wolf: ''\"first''\"\n** Lamb: ''\"second''\"";
    assert_eq!(
        texts(&extract_quotes(raw, Grammar::NestedDialogue)),
        vec!["Wolf: first\nLamb: second"]
    );
}

/// **Test: Standard page yields expanded quotes in order, without audio refs or sentinel.**
#[test]
fn test_standard_page() {
    let quotes = texts(&extract_quotes(AHRI_PAGE, Grammar::for_subject("Ahri")));
    assert_eq!(
        quotes,
        vec![
            "Don't you trust me?",
            "Lost in the Ionian wilds.",
            "Every step is a dance with the Monkey King.",
            "Take a breath, **MORTAL**.",
            "Dash with me.",
        ]
    );
    assert!(quotes
        .iter()
        .all(|q| !q.contains(AUDIO_MARKER) && q != SENTINEL_FILLER));
}

/// **Test: Dialogue page groups exchanges by nesting.**
#[test]
fn test_dialogue_page() {
    let quotes = texts(&extract_quotes(KINDRED_PAGE, Grammar::for_subject("Kindred")));
    assert_eq!(
        quotes,
        vec![
            "Lamb: Never one...\nWolf: ...without the other.",
            "Lamb: Wolf, who's next?\nWolf: The dog! I'll eat him.\nLamb: That's not how it works, Wolf.",
            "Wolf: I remember when we hunted Baron Nashor.",
        ]
    );
}

/// **Test: The standard grammar finds nothing on a dialogue page without `''"..."''` quotes.**
#[test]
fn test_grammar_mismatch_yields_empty() {
    let page = "* Lamb: Never one...\n** Wolf: ...without the other.";
    assert!(extract_quotes(page, Grammar::Standard).is_empty());
}
