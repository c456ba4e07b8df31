use storefront::catalog::PricingOption;
use storefront::filter::query::{
    decode, encode, encode_price_range, encode_pricing_options, parse_price_range,
    parse_pricing_options, parse_sort, PARAMS,
};
use storefront::filter::{FilterState, PriceRange, PricingSelection, QueryError, SortBy};

#[test]
fn empty_query_decodes_to_defaults() {
    let pairs: [(&str, &str); 0] = [];
    assert_eq!(decode(pairs), FilterState::default());
}

#[test]
fn decode_reads_every_parameter() {
    let filters = decode([
        ("keyword", "tee"),
        ("pricingOptions", "0+1"),
        ("sort", "price_low"),
        ("priceRange", "5+50"),
    ]);
    assert_eq!(filters.search_text, "tee");
    assert!(filters.pricing.contains(PricingOption::Paid));
    assert!(filters.pricing.contains(PricingOption::Free));
    assert_eq!(filters.sort_by, SortBy::PriceLow);
    assert_eq!(filters.price_range, PriceRange::new(5, 50));
}

#[test]
fn later_duplicates_win() {
    let filters = decode([("keyword", "first"), ("keyword", "second")]);
    assert_eq!(filters.search_text, "second");
}

#[test]
fn unknown_parameters_are_ignored() {
    let filters = decode([("utm_source", "mail"), ("page", "3")]);
    assert!(filters.is_default());
}

#[test]
fn malformed_price_range_falls_back_to_full() {
    for raw in ["", "10", "10+20+30", "abc+20", "10+inf", "NaN+5"] {
        let filters = decode([("priceRange", raw)]);
        assert!(filters.price_range.is_full(), "input {raw:?}");
    }
}

#[test]
fn price_range_errors_name_the_problem() {
    assert_eq!(
        parse_price_range("10"),
        Err(QueryError::MalformedPriceRange {
            raw: "10".to_string()
        })
    );
    assert_eq!(
        parse_price_range("x+20"),
        Err(QueryError::InvalidPriceBound {
            raw: "x".to_string()
        })
    );
}

#[test]
fn price_range_is_clamped_and_ordered() {
    assert_eq!(parse_price_range("-5+2000"), Ok(PriceRange::full()));
    assert_eq!(parse_price_range("300+100"), Ok(PriceRange::new(100, 300)));
    assert_eq!(parse_price_range("12.9+40.2"), Ok(PriceRange::new(12, 40)));
    // Form decoding turns `+` into a space.
    assert_eq!(parse_price_range("5 60"), Ok(PriceRange::new(5, 60)));
}

#[test]
fn pricing_options_drop_invalid_and_duplicate_tokens() {
    let selection = parse_pricing_options("2+7+x+2+0");
    assert_eq!(selection.len(), 2);
    assert!(selection.contains(PricingOption::ViewOnly));
    assert!(selection.contains(PricingOption::Paid));
    assert!(parse_pricing_options("").is_empty());
}

#[test]
fn unknown_sort_falls_back_to_name() {
    assert_eq!(parse_sort("price_high"), SortBy::PriceHigh);
    assert_eq!(parse_sort("cheapest"), SortBy::Name);
    assert_eq!(parse_sort(""), SortBy::Name);
}

#[test]
fn encode_leaves_defaults_empty() {
    let encoded = encode(&FilterState::default());
    let keys: Vec<&str> = encoded.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, PARAMS.to_vec());
    assert!(encoded.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn encode_then_decode_restores_state() {
    let filters = FilterState {
        search_text: "jacket".to_string(),
        pricing: [PricingOption::ViewOnly, PricingOption::Paid].into_iter().collect(),
        sort_by: SortBy::PriceLow,
        price_range: PriceRange::new(0, 120),
    };
    let encoded = encode(&filters);
    let decoded = decode(
        encoded
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_str())),
    );
    assert_eq!(decoded, filters);
}

#[test]
fn encoders_join_with_plus() {
    let selection: PricingSelection = [PricingOption::Free, PricingOption::Paid].into_iter().collect();
    assert_eq!(encode_pricing_options(&selection), "1+0");
    assert_eq!(encode_price_range(PriceRange::new(7, 99)), "7+99");
}
