use crate::app::clients::join_endpoint;
use crate::core::solver;
use crate::domain::model::{CalculationOutcome, ComputeOrigin, DilutionInputs, Variable};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;
use serde_json::Value;

const ENDPOINT: &str = "calculate/dilution";

/// Adapter for the dilution-calculation endpoint.
///
/// The wire contract: the service answers `{result, variable}` when it could
/// solve, and a body without `result` when it could not. Transport failures
/// are absorbed here; depending on configuration they degrade to the
/// "Backend not connected" sentinel or hand the inputs to the local solver.
pub struct CalculationClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> CalculationClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub async fn calculate(&self, inputs: &DilutionInputs) -> Result<CalculationOutcome> {
        let url = join_endpoint(self.config.base_url(), ENDPOINT);
        let body = serde_json::to_value(inputs)?;

        match self.transport.post_json(&url, &body).await {
            Ok(reply) => Ok(Self::interpret(reply)),
            Err(err) => {
                tracing::warn!("calculation service unreachable: {err}");
                if self.config.local_fallback() {
                    Ok(self.solve_locally(inputs))
                } else {
                    Ok(CalculationOutcome::Unavailable)
                }
            }
        }
    }

    fn interpret(reply: Value) -> CalculationOutcome {
        let value = reply.get("result").and_then(Value::as_f64);
        let variable = reply
            .get("variable")
            .and_then(Value::as_str)
            .and_then(Variable::from_name);

        match (value, variable) {
            (Some(value), Some(variable)) => CalculationOutcome::Solved {
                value,
                variable,
                origin: ComputeOrigin::Remote,
            },
            // No `result` field: the service rejected the request (wrong
            // number of unknowns) and explains itself only via `message`.
            _ => CalculationOutcome::Rejected,
        }
    }

    fn solve_locally(&self, inputs: &DilutionInputs) -> CalculationOutcome {
        match solver::solve(inputs) {
            Ok(solved) => {
                tracing::info!(
                    "solved {} locally while the service is unreachable",
                    solved.variable
                );
                CalculationOutcome::Solved {
                    value: solved.value,
                    variable: solved.variable,
                    origin: ComputeOrigin::Local,
                }
            }
            Err(err) => {
                tracing::debug!("local solver rejected the inputs: {err}");
                CalculationOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::transport::HttpTransport;
    use crate::config::Settings;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn settings_for(server: &MockServer, local_fallback: bool) -> Settings {
        Settings {
            base_url: server.base_url(),
            timeout: Duration::from_secs(5),
            local_fallback,
            ..Settings::default()
        }
    }

    fn client_for(settings: Settings) -> CalculationClient<HttpTransport, Settings> {
        let transport = HttpTransport::new(settings.timeout).unwrap();
        CalculationClient::new(transport, settings)
    }

    #[tokio::test]
    async fn solved_reply_becomes_remote_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/calculate/dilution")
                .json_body(serde_json::json!({"c1": 10.0, "v1": 5.0, "c2": 0.0, "v2": 10.0}));
            then.status(200)
                .json_body(serde_json::json!({"result": 5.0, "variable": "c2"}));
        });

        let client = client_for(settings_for(&server, true));
        let inputs = DilutionInputs::new(10.0, 5.0, 0.0, 10.0);
        let outcome = client.calculate(&inputs).await.unwrap();

        mock.assert();
        assert_eq!(
            outcome,
            CalculationOutcome::Solved {
                value: 5.0,
                variable: Variable::C2,
                origin: ComputeOrigin::Remote,
            }
        );
        assert_eq!(outcome.to_string(), "Result: 5 c2");
    }

    #[tokio::test]
    async fn reply_without_result_field_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/calculate/dilution");
            then.status(200).json_body(
                serde_json::json!({"message": "Please leave exactly one value as 0 to calculate it."}),
            );
        });

        let client = client_for(settings_for(&server, true));
        let outcome = client
            .calculate(&DilutionInputs::new(10.0, 5.0, 2.5, 20.0))
            .await
            .unwrap();

        assert_eq!(outcome, CalculationOutcome::Rejected);
        assert_eq!(outcome.to_string(), "Error: Check inputs");
    }

    #[tokio::test]
    async fn unreachable_service_falls_back_to_local_solver() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/calculate/dilution");
            then.status(500);
        });

        let client = client_for(settings_for(&server, true));
        let outcome = client
            .calculate(&DilutionInputs::new(10.0, 5.0, 0.0, 10.0))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CalculationOutcome::Solved {
                value: 5.0,
                variable: Variable::C2,
                origin: ComputeOrigin::Local,
            }
        );
        // Same display string whether solved remotely or locally.
        assert_eq!(outcome.to_string(), "Result: 5 c2");
    }

    #[tokio::test]
    async fn unreachable_service_without_fallback_reports_the_sentinel() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/calculate/dilution");
            then.status(500);
        });

        let client = client_for(settings_for(&server, false));
        let outcome = client
            .calculate(&DilutionInputs::new(10.0, 5.0, 0.0, 10.0))
            .await
            .unwrap();

        assert_eq!(outcome, CalculationOutcome::Unavailable);
        assert_eq!(outcome.to_string(), "Backend not connected");
    }

    #[tokio::test]
    async fn fallback_with_unsolvable_inputs_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/calculate/dilution");
            then.status(500);
        });

        let client = client_for(settings_for(&server, true));
        let outcome = client
            .calculate(&DilutionInputs::new(0.0, 5.0, 10.0, 0.0))
            .await
            .unwrap();

        assert_eq!(outcome, CalculationOutcome::Rejected);
    }
}
