use crate::common::{TestApp, new_client, routes};

const VALID: [(&str, &str); 5] = [
    ("financial_goal", "Buy a house"),
    ("timeframe", "5 years"),
    ("current_savings", "10000"),
    ("monthly_income", "4000"),
    ("risk_tolerance", "medium"),
];

const GENERIC: &str = "Please complete all fields before submitting.";

fn with(field: &str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    VALID
        .iter()
        .map(|&(name, v)| if name == field { (name, value) } else { (name, v) })
        .collect()
}

mod form_page {
    use super::*;

    #[tokio::test]
    async fn empty_form_is_served() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::FORM).await;

        assert_eq!(res.status, 200);
        for (name, _) in VALID {
            assert!(res.text.contains(&format!("name=\"{name}\"")), "{name} input missing");
        }
        assert!(res.flashed().is_empty());
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get("/nowhere").await;

        assert_eq!(res.status, 404);
    }
}

mod successful_submission {
    use super::*;

    #[tokio::test]
    async fn results_page_shows_all_values_unchanged() {
        let app = TestApp::spawn().await;

        let res = app.post_form(routes::RESULTS, &VALID).await;

        assert_eq!(res.status, 200, "unexpected response: {}", res.text);
        for (_, value) in VALID {
            assert!(res.text.contains(&format!("<dd>{value}</dd>")), "{value} missing");
        }
    }

    #[tokio::test]
    async fn values_are_trimmed() {
        let app = TestApp::spawn().await;
        let fields = with("financial_goal", "   Retire early  ");

        let res = app.post_form(routes::RESULTS, &fields).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("<dd>Retire early</dd>"));
    }

    #[tokio::test]
    async fn amounts_are_not_checked_for_numbers() {
        let app = TestApp::spawn().await;
        let fields = with("monthly_income", "depends on the month");

        let res = app.post_form(routes::RESULTS, &fields).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("<dd>depends on the month</dd>"));
    }

    #[tokio::test]
    async fn repeated_field_uses_first_value() {
        let app = TestApp::spawn().await;
        let mut fields = VALID.to_vec();
        fields.push(("financial_goal", "x"));

        let res = app.post_form(routes::RESULTS, &fields).await;

        assert_eq!(res.status, 200, "unexpected response: {}", res.text);
        assert!(res.text.contains("<dd>Buy a house</dd>"));
        assert!(!res.text.contains("<dd>x</dd>"));
    }

    #[tokio::test]
    async fn identical_input_renders_identical_output() {
        let app = TestApp::spawn().await;

        let first = app.post_form(routes::RESULTS, &VALID).await;
        let second = app.post_form(routes::RESULTS, &VALID).await;

        assert_eq!(first.status, 200);
        assert_eq!(first.text, second.text);
    }
}

mod incomplete_submission {
    use super::*;

    #[tokio::test]
    async fn all_blank_redirects_with_six_messages() {
        let app = TestApp::spawn().await;
        let blank: Vec<(&str, &str)> = VALID.iter().map(|&(name, _)| (name, "")).collect();

        let res = app.post_form(routes::RESULTS, &blank).await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));

        let page = app.get(routes::FORM).await;
        assert_eq!(
            page.flashed(),
            vec![
                GENERIC,
                "Missing: What is your financial goal?",
                "Missing: What is your target timeframe to achieve this goal?",
                "Missing: What is your current savings?",
                "Missing: What is your monthly income?",
                "Missing: What is your risk tolerance?",
            ]
        );
    }

    #[tokio::test]
    async fn whitespace_only_field_is_missing() {
        let app = TestApp::spawn().await;
        let fields = with("current_savings", " \t ");

        let res = app.post_form(routes::RESULTS, &fields).await;
        assert_eq!(res.status, 303);

        let page = app.get(routes::FORM).await;
        assert_eq!(
            page.flashed(),
            vec![GENERIC, "Missing: What is your current savings?"]
        );
    }

    #[tokio::test]
    async fn absent_fields_are_missing() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(routes::RESULTS, &[("timeframe", "10 years")])
            .await;
        assert_eq!(res.status, 303);

        let page = app.get(routes::FORM).await;
        let flashed = page.flashed();
        assert_eq!(flashed.len(), 5);
        assert!(!flashed.iter().any(|m| m.contains("timeframe")));
    }

    #[tokio::test]
    async fn messages_are_shown_only_once() {
        let app = TestApp::spawn().await;
        let fields = with("risk_tolerance", "");

        app.post_form(routes::RESULTS, &fields).await;

        let first = app.get(routes::FORM).await;
        assert_eq!(first.flashed().len(), 2);

        let second = app.get(routes::FORM).await;
        assert!(second.flashed().is_empty());
    }

    #[tokio::test]
    async fn repeated_failures_show_only_the_latest_messages() {
        let app = TestApp::spawn().await;
        let blank: Vec<(&str, &str)> = VALID.iter().map(|&(name, _)| (name, "")).collect();

        for _ in 0..8 {
            let res = app.post_form(routes::RESULTS, &blank).await;
            assert_eq!(res.status, 303);
        }

        let page = app.get(routes::FORM).await;
        let flashed = page.flashed();
        assert_eq!(flashed.len(), 6);
        assert_eq!(flashed.iter().filter(|m| m.as_str() == GENERIC).count(), 1);
    }

    #[tokio::test]
    async fn messages_do_not_leak_to_other_clients() {
        let app = TestApp::spawn().await;
        let fields = with("financial_goal", "");

        app.post_form(routes::RESULTS, &fields).await;

        let other = app.get_with(&new_client(), routes::FORM).await;
        assert!(other.flashed().is_empty());

        let own = app.get(routes::FORM).await;
        assert_eq!(own.flashed().len(), 2);
    }
}
