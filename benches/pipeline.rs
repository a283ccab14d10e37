use bizlens::analysis::messaging::MessagingRequest;
use bizlens::analysis::prompts::{messaging_prompt, swot_prompt};
use bizlens::analysis::recover::recover_object;
use bizlens::analysis::swot::SwotRequest;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn swot_request() -> SwotRequest {
    SwotRequest {
        company: "Acme Logistics Corporation".to_string(),
        industry: Some("Freight and logistics".to_string()),
        additional_context: Some(
            "Series B company expanding into the APAC region with 200 employees".to_string(),
        ),
    }
}

fn messaging_request() -> MessagingRequest {
    MessagingRequest {
        company: "Acme Logistics Corporation".to_string(),
        product: "RouteMaster".to_string(),
        target_audience: Some("Fleet operations managers".to_string()),
        key_features: Some("Live rerouting, fuel analytics, driver scoring".to_string()),
        competitors: Some("RouteCo, FleetWise".to_string()),
        business_goals: Some("Expand into the APAC region".to_string()),
        industry: Some("Freight and logistics".to_string()),
        tone_preference: Some("confident and practical".to_string()),
    }
}

fn prose_wrapped_payload() -> String {
    let document = serde_json::json!({
        "company": "Acme",
        "analysis": {
            "strengths": [{"point": "Brand", "description": "Recognized name"}],
            "weaknesses": [{"point": "Debt", "description": "High leverage"}],
            "opportunities": [{"point": "APAC", "description": "Untapped region"}],
            "threats": [{"point": "Regulation", "description": "Tightening rules"}]
        },
        "keyInsights": ["a", "b", "c"],
        "recommendations": ["x", "y", "z"]
    });
    format!("Here is the requested analysis:\n\n{document}\n\nLet me know if you need more.")
}

fn bench_prompt_synthesis(c: &mut Criterion) {
    let swot = swot_request();
    let messaging = messaging_request();

    c.bench_function("swot_prompt", |b| {
        b.iter(|| swot_prompt(black_box(&swot)));
    });

    c.bench_function("messaging_prompt", |b| {
        b.iter(|| messaging_prompt(black_box(&messaging)));
    });
}

fn bench_recovery(c: &mut Criterion) {
    let wrapped = prose_wrapped_payload();
    let direct: String = serde_json::json!({"company": "Acme", "keyInsights": ["a"]}).to_string();

    c.bench_function("recover_direct_json", |b| {
        b.iter(|| recover_object(black_box(&direct)));
    });

    c.bench_function("recover_prose_wrapped", |b| {
        b.iter(|| recover_object(black_box(&wrapped)));
    });
}

criterion_group!(benches, bench_prompt_synthesis, bench_recovery);
criterion_main!(benches);
