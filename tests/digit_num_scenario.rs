// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end scenario: a DIGIT rule and a NUM rule with a self-looping edge that
//! references DIGIT, exercised through usages, deletion protection, routes,
//! dependency order and the persistence round trip.

use proteus::format::{deserialize_syntax, serialize_syntax};
use proteus::matcher::Matcher;
use proteus::model::{EdgeContent, Node, Rule, RuleClass, Syntax, ValidationError};
use proteus::query::{dependency_order, routes, RouteDirection};
use proteus::render::render_tree;
use proteus::walk::Navigator;

fn scenario_syntax() -> Syntax {
    let mut digit = Rule::new("DIGIT");
    let entry = digit.entry_node_id();
    let accept = digit.add_node(Node::with_label("accept"));
    digit
        .add_edge(entry, accept, EdgeContent::Matcher(Matcher::range('0', '9')))
        .expect("digit edge");

    let mut num = Rule::new("NUM");
    let entry = num.entry_node_id();
    num.add_edge(entry, entry, EdgeContent::SubRule("DIGIT".into()))
        .expect("self-looping sub-rule edge");

    let mut syntax = Syntax::new();
    syntax.add_rule(digit).expect("add DIGIT");
    syntax.add_rule(num).expect("add NUM");
    syntax
}

#[test]
fn usages_and_deletion_follow_the_reference_graph() {
    let mut syntax = scenario_syntax();

    let usages = syntax
        .usages("DIGIT")
        .iter()
        .map(|rule| rule.name().as_str())
        .collect::<Vec<_>>();
    assert_eq!(usages, ["NUM"]);
    assert!(syntax.usages("NUM").is_empty());
    assert_eq!(syntax.rule_class("NUM"), Some(RuleClass::Primary));
    assert_eq!(syntax.rule_class("DIGIT"), Some(RuleClass::Inlinable));

    match syntax.delete_rule("DIGIT") {
        Err(ValidationError::RuleInUse { name, used_by }) => {
            assert_eq!(name, "DIGIT");
            assert_eq!(used_by, ["NUM"]);
        }
        other => panic!("expected RuleInUse, got {other:?}"),
    }

    syntax.delete_rule("NUM").expect("NUM is unreferenced");
    syntax.delete_rule("DIGIT").expect("DIGIT is now unreferenced");
    assert!(syntax.is_empty());
}

#[test]
fn routes_report_the_self_loop_as_a_cycle() {
    let syntax = scenario_syntax();
    let num = syntax.rule_by_name("NUM").expect("NUM exists");

    let found = routes(num, num.entry_node_id(), RouteDirection::Forward)
        .expect("the self loop is a route");
    assert_eq!(found.len(), 1);
    assert!(found[0].is_cycle());
    assert_eq!(found[0].edges().len(), 1);
}

#[test]
fn dependency_order_places_digit_before_num() {
    let syntax = scenario_syntax();
    let order = dependency_order(&syntax).expect("acyclic dependencies");
    assert_eq!(order, ["DIGIT", "NUM"]);
}

#[test]
fn persistence_round_trip_preserves_the_scenario() {
    let syntax = scenario_syntax();
    let document = serialize_syntax(&syntax);
    let reloaded = deserialize_syntax(&document).expect("round trip");

    assert_eq!(reloaded, syntax);

    let names = reloaded
        .rules()
        .iter()
        .map(|rule| rule.name().as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["DIGIT", "NUM"]);

    let digit = reloaded.rule_by_name("DIGIT").expect("DIGIT reloaded");
    let matcher = digit
        .edges()
        .values()
        .next()
        .and_then(|edge| edge.content().matcher())
        .expect("DIGIT edge carries a matcher");
    for ch in "059a _".chars() {
        assert_eq!(matcher.matches(ch), ch.is_ascii_digit());
    }

    assert_eq!(serialize_syntax(&reloaded), document);
}

#[test]
fn tree_rendering_lists_rules_and_their_edges() {
    let syntax = scenario_syntax();

    struct SyntaxNavigator<'a> {
        syntax: &'a Syntax,
    }

    impl Navigator<String> for SyntaxNavigator<'_> {
        fn children(&self, elem: &String) -> Vec<String> {
            if elem.as_str() == "grammar" {
                return self
                    .syntax
                    .rules()
                    .iter()
                    .map(|rule| rule.name().to_string())
                    .collect();
            }
            let Some(rule) = self.syntax.rule_by_name(elem) else {
                return Vec::new();
            };
            rule.edges()
                .values()
                .map(|edge| match edge.content() {
                    EdgeContent::Matcher(matcher) => matcher.render(),
                    EdgeContent::SubRule(name) => format!("<{name}>"),
                })
                .collect()
        }
    }

    let rendered = render_tree(
        "grammar".to_owned(),
        SyntaxNavigator { syntax: &syntax },
        |elem| elem.clone(),
    );
    let expected = "\
grammar
|-- DIGIT
|   `-- [0-9]
`-- NUM
    `-- <DIGIT>
";
    assert_eq!(rendered, expected);
}

#[test]
fn emission_strings_for_the_digit_matcher_are_canonical() {
    let syntax = scenario_syntax();
    let digit = syntax.rule_by_name("DIGIT").expect("DIGIT exists");
    let matcher = digit
        .edges()
        .values()
        .next()
        .and_then(|edge| edge.content().matcher())
        .expect("DIGIT edge carries a matcher");

    assert_eq!(matcher.render(), "[0-9]");
    assert_eq!(matcher.emit_expression(), "ch >= '0' && ch <= '9'");
}
