#[cfg(test)]
mod tests {
    use fetch_sim::{simulated_fetch_test, CallConfiguration, Error, FetchSimulator, ResponseTable};
    use futures::{future, join};
    use serde_json::json;

    fn svc_a_get_table() -> ResponseTable {
        let mut builder = ResponseTable::builder();
        builder.get("svcA", json!({ "id": 1 }));
        builder.build().unwrap()
    }

    fn svc_a_post_table() -> ResponseTable {
        let mut builder = ResponseTable::builder();
        builder.post("svcA", json!({ "ok": true }));
        builder.build().unwrap()
    }

    fn every_method_table() -> ResponseTable {
        let mut builder = ResponseTable::builder();
        for (index, method) in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"]
            .iter()
            .enumerate()
        {
            builder.mock("svc", *method, json!({ "method": method, "index": index }));
        }
        builder.mock("list", "GET", json!([1, "two", 3.5, null, false]));
        builder.mock("scalar", "GET", json!("plain string"));
        builder.build().unwrap()
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn configured_get_resolves_with_payload(sim: FetchSimulator) {
        let response = sim
            .simulate_fetch("svcA", CallConfiguration::new())
            .await
            .unwrap();

        assert!(response.ok());
        assert_eq!(response.json().await.unwrap(), json!({ "id": 1 }));
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn unconfigured_endpoint_rejects(sim: FetchSimulator) {
        let error = sim
            .simulate_fetch("svcB", CallConfiguration::new())
            .await
            .unwrap_err();

        assert!(matches!(error, Error::EndpointNotMocked(_)));
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn unconfigured_method_rejects(sim: FetchSimulator) {
        let error = sim
            .simulate_fetch("svcA", CallConfiguration::new().with_method("POST"))
            .await
            .unwrap_err();

        assert!(matches!(error, Error::MethodNotMocked { .. }));
    }

    #[simulated_fetch_test(svc_a_post_table)]
    async fn forced_failure_resolves_without_body(sim: FetchSimulator) {
        let response = sim
            .simulate_fetch(
                "svcA",
                CallConfiguration::new().with_method("POST").failing(),
            )
            .await
            .unwrap();

        assert!(!response.ok());
        assert!(!response.has_body());
        assert!(matches!(response.json().await, Err(Error::NoBody)));
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn concurrent_calls_are_independent(sim: FetchSimulator) {
        let (first, second) = join!(
            sim.simulate_fetch("svcA", CallConfiguration::new()),
            sim.simulate_fetch("svcA", CallConfiguration::new())
        );

        let first = first.unwrap().json().await.unwrap();
        let second = second.unwrap().json().await.unwrap();
        assert_eq!(first, json!({ "id": 1 }));
        assert_eq!(first, second);
    }

    #[simulated_fetch_test(svc_a_post_table)]
    async fn unconfigured_endpoint_rejects_for_any_method_or_flag(sim: FetchSimulator) {
        for method in &["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"] {
            for fail in &[false, true] {
                let result = sim
                    .simulate_fetch(
                        "svcZ",
                        CallConfiguration::new().with_method(*method).with_fail(*fail),
                    )
                    .await;

                assert!(result.unwrap_err().is_match_failure());
            }
        }
    }

    #[simulated_fetch_test(every_method_table)]
    async fn every_configured_pair_resolves_to_its_payload(sim: FetchSimulator) {
        for (index, method) in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS"]
            .iter()
            .enumerate()
        {
            let configuration = CallConfiguration::new().with_method(*method);

            let response = sim.simulate_fetch("svc", configuration.clone()).await.unwrap();
            assert!(response.ok());
            assert_eq!(
                response.json().await.unwrap(),
                json!({ "method": method, "index": index })
            );

            let failed = sim
                .simulate_fetch("svc", configuration.failing())
                .await
                .unwrap();
            assert!(!failed.ok());
            assert!(!failed.has_body());
        }
    }

    #[simulated_fetch_test(every_method_table)]
    async fn non_object_payloads_round_trip(sim: FetchSimulator) {
        let list = sim
            .simulate_fetch("list", CallConfiguration::new())
            .await
            .unwrap();
        let scalar = sim
            .simulate_fetch("scalar", CallConfiguration::new())
            .await
            .unwrap();

        assert_eq!(
            list.json().await.unwrap(),
            json!([1, "two", 3.5, null, false])
        );
        assert_eq!(scalar.json().await.unwrap(), json!("plain string"));
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn repeated_calls_give_the_same_outcome(sim: FetchSimulator) {
        let successes = (0..5).map(|_| sim.simulate_fetch("svcA", CallConfiguration::new()));
        let rejections = (0..5).map(|_| sim.simulate_fetch("svcB", CallConfiguration::new()));

        let (successes, rejections) =
            join!(future::join_all(successes), future::join_all(rejections));

        for response in successes {
            assert_eq!(response.unwrap().json().await.unwrap(), json!({ "id": 1 }));
        }
        for rejection in rejections {
            assert!(rejection.unwrap_err().is_match_failure());
        }
    }

    #[simulated_fetch_test(svc_a_get_table)]
    async fn defaults_match_explicit_values(sim: FetchSimulator) {
        let implicit = sim
            .simulate_fetch("svcA", CallConfiguration::new())
            .await
            .unwrap();
        let explicit = sim
            .simulate_fetch(
                "svcA",
                CallConfiguration::new()
                    .with_method("GET")
                    .with_header("content-type", "application/json"),
            )
            .await
            .unwrap();

        assert_eq!(implicit, explicit);
    }
}
