//! Macro expansion: a fixed sequence of rewrite passes over raw page markup.
//!
//! Each pass matches one macro shape and replaces every occurrence with plain display text.
//! Passes run once each, in declaration order, and never re-scan their own output: a macro
//! nested inside another macro's arguments is only rewritten if a later pass still matches it.
//! An occurrence with the wrong arity is left verbatim.
//!
//! Pass order:
//! 1. `{{sbc|text}}` → `**TEXT**`
//! 2. `{{ci|name|custom?}}`
//! 3. `[[target|label?]]` (targets starting with `File:` are skipped)
//! 4. `[[File:...]]` and surrounding spaces → single space
//! 5. `{{ai|ability|champion?|display?}}`
//! 6. `{{RP...}}` → `RP`
//! 7. `{{si|name}}`
//! 8. `{{ccib|file|link|display?}}` (case-insensitive name)
//! 9. `{{as|value}}`
//! 10. `{{sti|attribute|display?}}`
//! 11. `{{bi|buff|display?}}`
//! 12. `{{tt|text|hover}}`
//! 13. `{{ui|unit|display?}}`
//! 14. `{{csl|champ|skin?|display?}}`
//! 15. `{{fi|faction|display?}}`

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::invocation::MacroInvocation;
use crate::text::{BOLD_MARKER, RESOURCE_TOKEN};

/// One rewrite rule: how to read a match into an invocation, and how to resolve it.
struct MacroPass {
    regex: Regex,
    parse: fn(&Captures<'_>) -> MacroInvocation,
    resolve: fn(&MacroInvocation) -> Option<String>,
}

impl MacroPass {
    fn template(
        name: &str,
        case_insensitive: bool,
        resolve: fn(&MacroInvocation) -> Option<String>,
    ) -> Self {
        let flags = if case_insensitive { "(?i)" } else { "" };
        let pattern = format!(r"{}\{{\{{({})\|([^{{}}]*)\}}\}}", flags, regex::escape(name));
        Self {
            regex: Regex::new(&pattern).unwrap(),
            parse: parse_template,
            resolve,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                let invocation = (self.parse)(caps);
                (self.resolve)(&invocation).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

fn parse_template(caps: &Captures<'_>) -> MacroInvocation {
    MacroInvocation::template(&caps[1], caps.get(2).map_or("", |m| m.as_str()))
}

fn parse_link(caps: &Captures<'_>) -> MacroInvocation {
    MacroInvocation::link(&caps[1], caps.get(2).map(|m| m.as_str()))
}

/// All passes, in application order.
static PASSES: Lazy<Vec<MacroPass>> = Lazy::new(|| {
    vec![
        MacroPass::template("sbc", false, |inv| {
            inv.has_shape(1, 1)
                .then(|| format!("{0}{1}{0}", BOLD_MARKER, inv.positional[0].to_uppercase()))
        }),
        MacroPass::template("ci", false, |inv| {
            inv.has_shape(1, 2).then(|| first_present(inv, &[1, 0]))
        }),
        MacroPass {
            regex: Regex::new(r"\[\[([^\[\]|]*)(?:\|([^\[\]]*))?\]\]").unwrap(),
            parse: parse_link,
            resolve: |inv| {
                let target = inv.positional.first()?;
                if target.starts_with("File:") || target.trim().is_empty() {
                    return None;
                }
                Some(first_present(inv, &[1, 0]))
            },
        },
        MacroPass {
            regex: Regex::new(r" *\[\[File:[^\[\]]*\]\] *").unwrap(),
            parse: |_| MacroInvocation::template("File", ""),
            resolve: |_| Some(" ".to_string()),
        },
        MacroPass::template("ai", false, |inv| {
            inv.has_shape(1, 3).then(|| display_or(inv, 2, &[0]))
        }),
        MacroPass {
            regex: Regex::new(r"\{\{(RP)([^{}]*)\}\}").unwrap(),
            parse: parse_template,
            resolve: |_| Some(RESOURCE_TOKEN.to_string()),
        },
        MacroPass::template("si", false, |inv| {
            inv.has_shape(1, 1).then(|| inv.positional[0].clone())
        }),
        MacroPass::template("ccib", true, |inv| {
            (inv.has_shape(2, 3) && inv.arg(1).is_some()).then(|| display_or(inv, 2, &[1]))
        }),
        MacroPass::template("as", false, |inv| {
            inv.has_shape(1, 1).then(|| inv.positional[0].clone())
        }),
        MacroPass::template("sti", false, |inv| {
            inv.has_shape(1, 2).then(|| display_or(inv, 1, &[0]))
        }),
        MacroPass::template("bi", false, |inv| {
            inv.has_shape(1, 2).then(|| display_or(inv, 1, &[0]))
        }),
        MacroPass::template("tt", false, |inv| {
            inv.has_shape(2, 2).then(|| inv.positional[0].clone())
        }),
        MacroPass::template("ui", false, |inv| {
            inv.has_shape(1, 2).then(|| display_or(inv, 1, &[0]))
        }),
        MacroPass::template("csl", false, |inv| {
            inv.has_shape(1, 3).then(|| display_or(inv, 2, &[1, 0]))
        }),
        MacroPass::template("fi", false, |inv| {
            inv.has_shape(1, 2).then(|| display_or(inv, 1, &[0]))
        }),
    ]
});

/// First non-blank positional argument among `indices`; the caller has checked that index 0 exists.
fn first_present(inv: &MacroInvocation, indices: &[usize]) -> String {
    indices
        .iter()
        .find_map(|&i| inv.arg(i))
        .unwrap_or(inv.positional[0].as_str())
        .to_string()
}

fn display_or(inv: &MacroInvocation, display_index: usize, fallbacks: &[usize]) -> String {
    match inv.display(display_index) {
        Some(display) => display.to_string(),
        None => first_present(inv, fallbacks),
    }
}

static RESIDUAL_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*([^{}|\s]+)").unwrap());

/// Applies every expansion pass once, in order. Unrecognized or malformed markup is passed through.
pub fn expand(text: &str) -> String {
    PASSES
        .iter()
        .fold(text.to_string(), |acc, pass| pass.apply(&acc))
}

/// Names of template macros still present in expanded text, in order of appearance.
pub fn residual_macros(text: &str) -> Vec<&str> {
    RESIDUAL_MACRO
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_bold_caps() {
        assert_eq!(expand("{{sbc|ping}}"), "**PING**");
        assert_eq!(expand("{{sbc|Upon attack:}} x"), "**UPON ATTACK:** x");
    }

    #[test]
    fn test_champion_inline() {
        assert_eq!(expand("{{ci|Kindred}}"), "Kindred");
        assert_eq!(expand("{{ci|Kindred|the Hunters}}"), "the Hunters");
    }

    #[test]
    fn test_wiki_link() {
        assert_eq!(expand("[[Runeterra]]"), "Runeterra");
        assert_eq!(expand("[[Shadow Isles|the Isles]]"), "the Isles");
        assert_eq!(expand("[[Shadow Isles|]]"), "Shadow Isles");
    }

    #[test]
    fn test_file_embed_becomes_single_space() {
        assert_eq!(expand("before  [[File:Kindred.png|20px]]  after"), "before after");
        assert_eq!(expand("[[File:Kindred.png]]"), " ");
    }

    #[test]
    fn test_file_embed_with_link_param() {
        assert_eq!(
            expand("a [[File:Icon.png|20px|link=Kindred]] b"),
            "a b"
        );
    }

    #[test]
    fn test_ability_inline() {
        assert_eq!(expand("{{ai|Mounting Dread}}"), "Mounting Dread");
        assert_eq!(expand("{{ai|Mounting Dread|Kindred}}"), "Mounting Dread");
        assert_eq!(expand("{{ai|Mounting Dread|Kindred|dread}}"), "dread");
        assert_eq!(expand("{{ai|Mounting Dread|Kindred|display=dread}}"), "dread");
    }

    #[test]
    fn test_resource_token() {
        assert_eq!(expand("costs {{RP|1350}}"), "costs RP");
        assert_eq!(expand("{{RP}}"), "RP");
    }

    #[test]
    fn test_summoner_spell_inline() {
        assert_eq!(expand("{{si|Flash}}"), "Flash");
    }

    #[test]
    fn test_cross_reference_inline() {
        assert_eq!(expand("{{ccib|Wolf.png|Wolf}}"), "Wolf");
        assert_eq!(expand("{{ccib|Wolf.png|Wolf|the Wolf}}"), "the Wolf");
        assert_eq!(expand("{{CCIB|Wolf.png|Wolf}}"), "Wolf");
    }

    #[test]
    fn test_attribute_style() {
        assert_eq!(expand("{{as|bonus attack damage}}"), "bonus attack damage");
    }

    #[test]
    fn test_stat_inline() {
        assert_eq!(expand("{{sti|Armor}}"), "Armor");
        assert_eq!(expand("{{sti|Armor|armored}}"), "armored");
    }

    #[test]
    fn test_buff_inline() {
        assert_eq!(expand("{{bi|Mark of the Kindred}}"), "Mark of the Kindred");
        assert_eq!(expand("{{bi|Mark of the Kindred|marked}}"), "marked");
    }

    #[test]
    fn test_tooltip_discards_hover() {
        assert_eq!(expand("{{tt|Wolf|the hungry one}}"), "Wolf");
        assert_eq!(expand("{{tt|50 damage|ratio=0.5}}"), "50 damage");
    }

    #[test]
    fn test_unit_inline() {
        assert_eq!(expand("{{ui|Baron Nashor}}"), "Baron Nashor");
        assert_eq!(expand("{{ui|Baron Nashor|Baron}}"), "Baron");
    }

    #[test]
    fn test_champion_skin_line() {
        assert_eq!(expand("{{csl|Kindred}}"), "Kindred");
        assert_eq!(expand("{{csl|Kindred|Shadowfire}}"), "Shadowfire");
        assert_eq!(expand("{{csl|Kindred|Shadowfire|Shadowfire Kindred}}"), "Shadowfire Kindred");
        assert_eq!(expand("{{csl|Kindred||Original}}"), "Original");
    }

    #[test]
    fn test_faction_inline() {
        assert_eq!(expand("{{fi|Shadow Isles}}"), "Shadow Isles");
        assert_eq!(expand("{{fi|Shadow Isles|the Isles}}"), "the Isles");
    }

    #[test]
    fn test_malformed_macros_pass_through() {
        assert_eq!(expand("{{tt|only text}}"), "{{tt|only text}}");
        assert_eq!(expand("{{sbc|a|b}}"), "{{sbc|a|b}}");
        assert_eq!(expand("{{ci|}}"), "{{ci|}}");
        assert_eq!(expand("{{ci|Ahri"), "{{ci|Ahri");
        assert_eq!(expand("[[unterminated"), "[[unterminated");
    }

    #[test]
    fn test_unknown_macro_passes_through() {
        let text = "{{sm2|Kindred_Original_Attack_1.ogg}} ''\"Never one...\"''";
        assert_eq!(expand(text), text);
    }

    #[test]
    fn test_nested_macro_expanded_by_later_pass() {
        // sbc runs before tt, so the inner sbc is rewritten first and tt then matches.
        assert_eq!(expand("{{tt|{{sbc|wolf}}|hover}}"), "**WOLF**");
    }

    #[test]
    fn test_nested_macro_not_rescanned_by_earlier_pass() {
        // ci runs after sbc: the inner ci is rewritten, but sbc does not run again.
        assert_eq!(expand("{{sbc|{{ci|Kindred}}}}"), "{{sbc|Kindred}}");
    }

    #[test]
    fn test_expand_is_idempotent_on_plain_text() {
        let plain = "**PING** ''\"hello\"'' and some text";
        assert_eq!(expand(plain), plain);
        assert_eq!(expand(&expand(plain)), expand(plain));
    }

    #[test]
    fn test_residual_macros() {
        let text = expand("{{sm2|a.ogg}} {{ci|Ahri}} {{ unknown |x}}");
        assert_eq!(residual_macros(&text), vec!["sm2", "unknown"]);
        assert!(residual_macros("plain").is_empty());
    }
}
