//! Property-based tests for the arity calculus
//!
//! For any parameter list, the derived arity range must obey:
//! - min = (# required positionals) + (1 if a required keyword exists)
//! - max = unbounded if a rest parameter exists, else
//!   (# required + # optional) + (1 if any keyword-family parameter)
//! - min <= max always

use proptest::prelude::*;

use flowpipe::{Parameter, Signature};

#[derive(Debug, Clone)]
struct Shape {
    required: usize,
    optional: usize,
    rest: bool,
    keyword: bool,
    required_keyword: bool,
    keyword_rest: bool,
    block: bool,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (
        0usize..5,
        0usize..5,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(required, optional, rest, keyword, required_keyword, keyword_rest, block)| Shape {
                required,
                optional,
                rest,
                keyword,
                required_keyword,
                keyword_rest,
                block,
            },
        )
}

fn signature_for(shape: &Shape) -> Signature {
    let mut params = Vec::new();
    for i in 0..shape.required {
        params.push(Parameter::required(format!("r{}", i)));
    }
    for i in 0..shape.optional {
        params.push(Parameter::optional(format!("o{}", i)));
    }
    if shape.rest {
        params.push(Parameter::rest("rest"));
    }
    if shape.required_keyword {
        params.push(Parameter::required_keyword("kreq"));
    }
    if shape.keyword {
        params.push(Parameter::keyword("kopt"));
    }
    if shape.keyword_rest {
        params.push(Parameter::keyword_rest("krest"));
    }
    if shape.block {
        params.push(Parameter::block("blk"));
    }
    Signature::new(params)
}

proptest! {
    #[test]
    fn arity_min_counts_required_slots(shape in shape_strategy()) {
        let arity = signature_for(&shape).arity();
        let expected_min = shape.required + usize::from(shape.required_keyword);
        prop_assert_eq!(arity.min, expected_min);
    }

    #[test]
    fn arity_max_counts_acceptable_slots(shape in shape_strategy()) {
        let arity = signature_for(&shape).arity();
        if shape.rest {
            prop_assert_eq!(arity.max, None);
        } else {
            let any_keyword = shape.keyword || shape.required_keyword || shape.keyword_rest;
            let expected_max = shape.required + shape.optional + usize::from(any_keyword);
            prop_assert_eq!(arity.max, Some(expected_max));
        }
    }

    #[test]
    fn arity_min_never_exceeds_max(shape in shape_strategy()) {
        let arity = signature_for(&shape).arity();
        if let Some(max) = arity.max {
            prop_assert!(arity.min <= max);
        }
    }

    #[test]
    fn arity_is_stable_across_queries(shape in shape_strategy()) {
        let signature = signature_for(&shape);
        prop_assert_eq!(signature.arity(), signature.arity());
    }
}
