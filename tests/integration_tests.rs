//! Integration tests for textrank_keywords

use textrank_keywords::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised.
"#;

#[test]
fn test_full_pipeline() {
    // Preprocess
    let preprocessor = TextPreprocessor::english();
    let words = preprocessor.preprocess_text(SAMPLE_TEXT);
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| !preprocessor.is_stopword(w)));
    assert!(words.iter().all(|w| w.chars().all(|c| !c.is_uppercase())));

    // Encode
    let mut encoder = TextEncoder::new();
    let tokens = encoder.encode(&words).unwrap();
    assert_eq!(tokens.len(), words.len());

    // Build graph
    let config = TextRankConfig::default().with_top_n(10);
    let graph = config
        .strategy
        .build_from_tokens(&tokens, config.window_length)
        .unwrap();
    assert_eq!(graph.vertex_count(), encoder.len());
    assert!(graph.edge_count() > 0);

    // Rank
    let mut ranker = VanillaTextRank::new(&*graph, RankingParams::from_config(&config));
    let outcome = ranker.score_vertices().unwrap();
    assert!(outcome.converged);
    assert!(outcome.iterations > 0);

    // Select and decode
    let top = ranker.top_keywords(config.top_n);
    assert_eq!(top.len(), 10);
    let decoded = encoder.decode(&top).unwrap();
    assert_eq!(decoded[0], "learning");
}

#[test]
fn test_extractor_matches_manual_pipeline() {
    let config = TextRankConfig::default().with_top_n(10);
    let keywords = extract_keywords(SAMPLE_TEXT, &config).unwrap();

    assert_eq!(keywords.len(), 10);
    assert_eq!(keywords[0].word, "learning");
    assert_eq!(keywords[0].rank, 1);
    for pair in keywords.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        assert_eq!(pair[0].rank + 1, pair[1].rank);
    }
}

#[test]
fn test_pair_scenario() {
    let tokens = [1, 2, 3, 1, 2, 4];
    let pairs = extract_pairs(&tokens, 3).unwrap();

    for (a, b) in [(1, 2), (1, 3), (2, 3), (1, 4)] {
        let expected = Pair::new(a, b).unwrap();
        assert_eq!(pairs.iter().filter(|&&p| p == expected).count(), 1);
    }

    for strategy in [GraphStrategy::AdjacencyMatrix, GraphStrategy::EdgeList] {
        let graph = strategy.build_from_tokens(&tokens, 3).unwrap();
        assert_eq!(graph.calculate_inout_score(1).unwrap(), 3);
        let mut neighbors = graph.neighbors(1).unwrap();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![2, 3, 4]);
    }
}

#[test]
fn test_four_cycle_scenario() {
    for strategy in [GraphStrategy::AdjacencyMatrix, GraphStrategy::EdgeList] {
        let mut graph = strategy.build();
        for (a, b) in [(10, 20), (20, 30), (30, 40), (40, 10)] {
            graph.add_edge(a, b).unwrap();
        }

        let params = RankingParams::default()
            .with_damping(0.85)
            .with_threshold(0.0001);
        let mut ranker = VanillaTextRank::new(&*graph, params);
        assert!(ranker.score_vertices().unwrap().converged);

        let scores = ranker.scores().unwrap();
        let expected = scores[&10];
        assert!(scores.values().all(|s| (s - expected).abs() < 1e-12));
        assert_eq!(ranker.top_keywords(2), vec![10, 20]);
    }
}

#[test]
fn test_top_n_beyond_vertex_count() {
    let graph = GraphStrategy::EdgeList.build_from_tokens(&[7, 8, 9], 2).unwrap();
    let mut ranker = VanillaTextRank::new(&*graph, RankingParams::default());
    ranker.score_vertices().unwrap();

    let top = ranker.top_keywords(50);
    assert_eq!(top.len(), 3);
    // the middle of a path has the highest score
    assert_eq!(top[0], 8);
}

#[test]
fn test_graph_contract_errors() {
    for strategy in [GraphStrategy::AdjacencyMatrix, GraphStrategy::EdgeList] {
        let mut graph = strategy.build();

        let err = graph.add_edge(5, 5).unwrap_err();
        assert!(matches!(err, TextRankError::InvalidInput { .. }));
        assert!(graph.is_empty());

        graph.add_edge(5, 6).unwrap();
        graph.add_edge(6, 5).unwrap();
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.is_incidental(5, 6), Incidence::Adjacent);
        assert_eq!(graph.is_incidental(6, 5), Incidence::Adjacent);
        assert_eq!(graph.is_incidental(5, 7), Incidence::Unknown);
        assert!(matches!(
            graph.calculate_inout_score(7),
            Err(TextRankError::UnknownVertex { vertex: 7 })
        ));

        assert!(matches!(
            graph.fill_from_tokens(&[], 3),
            Err(TextRankError::EmptyInput { .. })
        ));
        assert!(matches!(
            graph.fill_from_tokens(&[1, 2], 1),
            Err(TextRankError::InvalidInput { .. })
        ));
        assert_eq!(graph.vertex_count(), 2);
    }
}

#[test]
fn test_isolated_tokens_are_rankable() {
    // a single word shares no window, but must still be a vertex
    let graph = GraphStrategy::AdjacencyMatrix.build_from_tokens(&[42], 3).unwrap();
    assert_eq!(graph.vertices(), &[42]);
    assert_eq!(graph.calculate_inout_score(42).unwrap(), 0);

    let mut ranker = VanillaTextRank::new(&*graph, RankingParams::default());
    ranker.score_vertices().unwrap();
    assert_eq!(ranker.top_keywords(1), vec![42]);
}

#[test]
fn test_position_biased_pipeline() {
    let words = TextPreprocessor::english().preprocess_text(SAMPLE_TEXT);
    let mut encoder = TextEncoder::new();
    let tokens = encoder.encode(&words).unwrap();

    let mut graph = GraphStrategy::EdgeList.build_from_tokens(&tokens, 3).unwrap();
    graph.fill_positions(&tokens);
    graph.calculate_position_weights().unwrap();

    let first = tokens[0];
    let positions = graph.positions(first).unwrap();
    assert_eq!(positions[0], 0);

    let mut biased = PositionBiasedTextRank::new(&*graph, RankingParams::default()).unwrap();
    assert!(biased.score_vertices().unwrap().converged);

    let mut vanilla = VanillaTextRank::new(&*graph, RankingParams::default());
    vanilla.score_vertices().unwrap();

    // "machine" opens the text, so the prior lifts it relative to vanilla
    let machine = encoder.word_id("machine").unwrap();
    let biased_rank = biased.top_keywords(100).iter().position(|&t| t == machine);
    let vanilla_rank = vanilla.top_keywords(100).iter().position(|&t| t == machine);
    assert!(biased_rank.unwrap() <= vanilla_rank.unwrap());
}

#[test]
fn test_encoder_errors() {
    let mut encoder = TextEncoder::new();
    let empty: [&str; 0] = [];
    assert!(matches!(
        encoder.encode(&empty),
        Err(TextRankError::EmptyInput { .. })
    ));

    let ids = encoder.encode(&["alpha", "beta", "alpha"]).unwrap();
    assert_eq!(ids, vec![1000, 1001, 1000]);
    assert!(matches!(
        encoder.decode(&[1000, 999]),
        Err(TextRankError::DecodeMiss { id: 999 })
    ));
}

#[test]
fn test_config_from_json() {
    let config = TextRankConfig::from_json(
        r#"{"window_length": 4, "strategy": "adjacency_matrix", "variant": "position_biased", "top_n": 3}"#,
    )
    .unwrap();
    assert_eq!(config.window_length, 4);
    assert_eq!(config.strategy, GraphStrategy::AdjacencyMatrix);
    assert_eq!(config.variant, Variant::PositionBiased);
    assert_eq!(config.damping, 0.85);

    let keywords = extract_keywords(SAMPLE_TEXT, &config).unwrap();
    assert_eq!(keywords.len(), 3);

    assert!(matches!(
        TextRankConfig::from_json(r#"{"damping": 1.5}"#),
        Err(TextRankError::InvalidConfig { .. })
    ));
    assert!(matches!(
        TextRankConfig::from_json("{not json"),
        Err(TextRankError::Serialization { .. })
    ));
}

#[test]
fn test_all_configurations_agree_on_shape() {
    for strategy in [GraphStrategy::AdjacencyMatrix, GraphStrategy::EdgeList] {
        for variant in [Variant::Vanilla, Variant::PositionBiased] {
            let config = TextRankConfig::default()
                .with_strategy(strategy)
                .with_variant(variant)
                .with_top_n(5);
            let result = KeywordExtractor::with_config(config)
                .extract_with_info(SAMPLE_TEXT)
                .unwrap();

            assert!(result.converged, "{strategy}/{variant} did not converge");
            assert_eq!(result.keywords.len(), 5);
        }
    }
}

#[test]
fn test_dynamic_ranker_selection() {
    let tokens = [1, 2, 3, 2, 4, 5, 2];
    let mut graph = GraphStrategy::AdjacencyMatrix.build_from_tokens(&tokens, 2).unwrap();
    graph.fill_positions(&tokens);
    graph.calculate_position_weights().unwrap();

    for variant in [Variant::Vanilla, Variant::PositionBiased] {
        let mut ranker: Box<dyn KeywordRanker + '_> = match variant {
            Variant::Vanilla => Box::new(VanillaTextRank::new(&*graph, RankingParams::default())),
            Variant::PositionBiased => Box::new(
                PositionBiasedTextRank::new(&*graph, RankingParams::default()).unwrap(),
            ),
        };
        ranker.score_vertices().unwrap();
        assert_eq!(ranker.top_keywords(1), vec![2]);
    }
}
