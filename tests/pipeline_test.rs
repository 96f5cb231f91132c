use signbridge::core::{Classification, Language, Translator};
use signbridge::error::SignError;
use signbridge::history::HistoryStore;
use std::sync::Arc;

mod common;
use common::mock_llm::MockLlm;
use common::TestContext;

#[tokio::test]
async fn test_chemical_formula_skips_language_model() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("SHOULD NOT BE USED"));
    let translator = ctx.translator(llm.clone());

    let out = translator.translate("h2o", Language::Isl).await.unwrap();

    assert_eq!(out.gloss, vec!["H", "TWO", "O"]);
    assert_eq!(out.signs.ids(), ["h", "two", "o"]);
    assert_eq!(llm.calls(), 0);
    assert!(matches!(
        out.classification,
        Classification::ChemicalFormula { .. }
    ));
}

#[tokio::test]
async fn test_physics_formula_variants_skip_language_model() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("SHOULD NOT BE USED"));
    let translator = ctx.translator(llm.clone());

    for input in ["F=ma", "f = m a", "F = ma", "F=MA"] {
        let out = translator.translate(input, Language::Asl).await.unwrap();
        assert_eq!(out.gloss, vec!["F", "EQUAL", "M", "A"], "input {input}");
        assert_eq!(out.signs.ids(), ["f", "equal", "m", "a"]);

        let json = serde_json::to_value(&out.signs).unwrap();
        assert_eq!(json["_is_formula"], true);
        assert_eq!(json["_formula_key"], "f=ma");
        assert_eq!(json["_formula_input"], input);
    }
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn test_short_algebra_is_normalized_locally() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("SHOULD NOT BE USED"));
    let translator = ctx.translator(llm.clone());

    let out = translator.translate("x2 + 2 = 6", Language::Isl).await.unwrap();
    assert_eq!(
        out.gloss,
        vec!["X", "SQUARE", "PLUS", "TWO", "EQUAL", "SIX"]
    );
    assert_eq!(llm.calls(), 0);
    ctx.assert_sound(&out.signs.ids().to_vec());
}

#[tokio::test]
async fn test_algebra_resembling_a_formula_is_fully_expanded() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("SHOULD NOT BE USED"));
    let translator = ctx.translator(llm.clone());

    let out = translator
        .translate("v = i^r + 3x", Language::Isl)
        .await
        .unwrap();
    assert_eq!(
        out.gloss,
        vec!["V", "EQUAL", "I", "POWER", "R", "PLUS", "THREE", "X"]
    );
    assert_eq!(llm.calls(), 0);
    ctx.assert_sound(&out.signs.ids().to_vec());
}

#[tokio::test]
async fn test_invented_word_is_fingerspelled() {
    let ctx = TestContext::new();
    let translator = ctx.translator(Arc::new(MockLlm::replying("GLORPTASTIC")));

    let out = translator
        .translate("glorptastic", Language::Asl)
        .await
        .unwrap();
    let expected: Vec<String> = "glorptastic".chars().map(|c| c.to_string()).collect();
    assert_eq!(out.signs.ids(), expected.as_slice());
    assert_eq!(out.signs.display(), "G-L-O-R-P-T-A-S-T-I-C");
}

#[tokio::test]
async fn test_suffix_recovery_and_stale_synonym() {
    let ctx = TestContext::new();
    let translator = ctx.translator(Arc::new(MockLlm::replying("BOY RUNNING HI")));

    let out = translator
        .translate("the boy is running, hi", Language::Asl)
        .await
        .unwrap();
    // HI -> HELLO is listed but has no asset, so it is spelled out
    assert_eq!(out.signs.ids(), ["boy", "run", "h", "i"]);
    assert_eq!(out.signs.display(), "BOY RUNNING H-I");
}

#[tokio::test]
async fn test_repeated_model_output_is_truncated() {
    let ctx = TestContext::new();
    let translator = ctx.translator(Arc::new(MockLlm::replying(
        "ISL Gloss: BOY FOOD EAT BOY FOOD EAT",
    )));

    let out = translator
        .translate("the boy eats food", Language::Isl)
        .await
        .unwrap();
    assert_eq!(out.gloss, vec!["BOY", "FOOD", "EAT"]);
    assert_eq!(out.signs.ids(), ["boy", "food", "eat"]);
}

#[tokio::test]
async fn test_service_outage_falls_back_locally() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::failing());
    let translator = ctx.translator(llm.clone());

    let out = translator
        .translate("The boy eats food", Language::Isl)
        .await
        .unwrap();
    assert_eq!(out.gloss, vec!["BOY", "EATS", "FOOD"]);
    assert_eq!(out.signs.ids(), ["boy", "eat", "food"]);
    assert_eq!(llm.calls(), 1);
}

#[tokio::test]
async fn test_prompt_carries_normalized_text() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("FORCE MASS"));
    let translator = ctx.translator(llm.clone());

    translator
        .translate(
            "explain why the force grows when we double the mass",
            Language::Asl,
        )
        .await
        .unwrap();
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("double the mass"));
    assert!(prompts[0].contains("ASL gloss"));
}

#[tokio::test]
async fn test_empty_input_is_rejected() {
    let ctx = TestContext::new();
    let llm = Arc::new(MockLlm::replying("ANY"));
    let translator = ctx.translator(llm.clone());

    for input in ["", "   ", "\n\t"] {
        assert!(matches!(
            translator.translate(input, Language::Isl).await,
            Err(SignError::EmptyInput)
        ));
    }
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn test_every_emitted_identifier_has_an_asset() {
    let ctx = TestContext::new();
    let translator = ctx.offline_translator();

    for input in [
        "h2o",
        "E = mc^2",
        "The happy boy makes red food",
        "α + β = γ",
        "CO2 and H2O make sugar",
        "zzz qqq 42",
        "!!! @@@ ###",
        "photosynthesis needs water",
    ] {
        let out = translator.translate(input, Language::Isl).await.unwrap();
        ctx.assert_sound(&out.signs.ids().to_vec());
    }
}

#[tokio::test]
async fn test_history_is_capped() {
    let ctx = TestContext::new();
    let history = Arc::new(HistoryStore::in_memory(3).unwrap());
    let translator = ctx.offline_translator().with_history(history.clone());

    for word in ["boy", "food", "water", "red", "happy"] {
        translator.translate(word, Language::Asl).await.unwrap();
    }

    assert_eq!(history.len().unwrap(), 3);
    let inputs: Vec<String> = history
        .recent(10)
        .unwrap()
        .into_iter()
        .map(|e| e.input)
        .collect();
    assert_eq!(inputs, vec!["happy", "red", "water"]);
}

#[tokio::test]
async fn test_translator_from_config() {
    let ctx = TestContext::new();
    let translator = Translator::from_config(&ctx.config()).unwrap();

    let out = translator.translate("boy eat food", Language::Asl).await.unwrap();
    assert_eq!(out.signs.ids(), ["boy", "eat", "food"]);

    let history = translator.history().expect("history opened from config");
    assert_eq!(history.recent(1).unwrap()[0].display, "BOY EAT FOOD");
}

#[test]
fn test_translate_gloss_json_shape() {
    let ctx = TestContext::new();
    let translator = ctx.offline_translator();
    let seq = translator.translate_gloss(&["WATER".to_string(), "XY".to_string()]);

    let json = serde_json::to_value(&seq).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "1": "water",
            "2": "x",
            "3": "y",
            "_display": "WATER X-Y",
        })
    );
}
