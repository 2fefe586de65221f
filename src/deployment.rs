// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Waiting for a freshly started deployment to become visible.
//!
//! After `POST /xpanse/service` the orchestrator answers with the new id
//! before the service detail exists. The detail endpoint is re-polled every
//! [`WAIT_SERVICE_PERIOD`] until it answers or [`DEPLOY_TIMEOUT`] is spent.
//! Running out of budget is an outcome, not an error.

use crate::client::{Result, ServiceApi};
use crate::types::{CreateRequest, DeployServiceEntity};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEPLOY_TIMEOUT: Duration = Duration::from_millis(3_600_000);

pub const WAIT_SERVICE_PERIOD: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Total budget; a retry is scheduled only while some of it remains.
    pub timeout: Duration,
    pub period: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            timeout: DEPLOY_TIMEOUT,
            period: WAIT_SERVICE_PERIOD,
        }
    }
}

impl PollPolicy {
    /// Upper bound of sleeps before the poller gives up.
    pub fn max_retries(&self) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let retries = self.timeout.as_millis().div_ceil(self.period.as_millis());
        u32::try_from(retries).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaitOutcome<T> {
    Ready { value: T, attempts: u32 },
    /// Budget exhausted while every probe failed
    Abandoned { attempts: u32 },
}

impl<T> WaitOutcome<T> {
    pub fn attempts(&self) -> u32 {
        match self {
            WaitOutcome::Ready { attempts, .. } | WaitOutcome::Abandoned { attempts } => *attempts,
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            WaitOutcome::Ready { value, .. } => Some(value),
            WaitOutcome::Abandoned { .. } => None,
        }
    }
}

/// Runs `probe` until it succeeds or the budget of `policy` is spent.
///
/// Each failure with budget left sleeps one period and charges it to the
/// budget. A zero period never retries.
pub async fn wait_until<T, E, F, Fut>(policy: PollPolicy, mut probe: F) -> WaitOutcome<T>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let mut remaining = policy.timeout;
    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);
        match probe().await {
            Ok(value) => return WaitOutcome::Ready { value, attempts },
            Err(e) => {
                debug!(attempts, remaining_ms = remaining.as_millis() as u64, "probe failed: {}", e);
                if remaining.is_zero() || policy.period.is_zero() {
                    warn!(attempts, "giving up after {:?}", policy.timeout);
                    return WaitOutcome::Abandoned { attempts };
                }
                tokio::time::sleep(policy.period).await;
                remaining = remaining.saturating_sub(policy.period);
            }
        }
    }
}

/// Polls the detail of service `id` until the orchestrator returns it.
pub async fn wait_service_ready(
    api: &ServiceApi,
    id: &str,
    policy: PollPolicy,
) -> WaitOutcome<DeployServiceEntity> {
    info!("waiting for service {} to be ready", id);
    let outcome = wait_until(policy, || api.service_detail(id)).await;
    if let WaitOutcome::Ready { value, attempts } = &outcome {
        info!(
            attempts,
            state = %value.service.service_deployment_state,
            "service {} is ready", id
        );
    }
    outcome
}

/// Starts a deployment and waits for it.
///
/// Only the start call can fail; the wait itself always yields an outcome.
pub async fn deploy_and_wait(
    api: &ServiceApi,
    request: &CreateRequest,
    policy: PollPolicy,
) -> Result<(String, WaitOutcome<DeployServiceEntity>)> {
    let id = api.start(request).await?;
    info!("deployment of {} {} started as {}", request.name, request.version, id);
    let outcome = wait_service_ready(api, &id, policy).await;
    Ok((id, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Configuration;
    use crate::client::apis::testing::ScriptedHttpLibrary;
    use crate::tests::{create_test_ocl, json_response};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    const DETAIL_JSON: &str = r#"{
        "id": "6f1d6d4c-9a5e-4bb5-8d43-0c3b7a0e8f11",
        "category": "middleware",
        "name": "kafka",
        "version": "v3.3.2",
        "csp": "huawei",
        "flavor": "1-node-with-zookeeper",
        "serviceDeploymentState": "DEPLOYING",
        "createTime": "2023-03-01T10:00:00Z",
        "lastModifiedTime": "2023-03-01T10:00:00Z"
    }"#;

    #[test]
    fn test_default_policy() {
        let policy = PollPolicy::default();
        assert_eq!(policy.timeout.as_millis(), 3_600_000);
        assert_eq!(policy.period.as_millis(), 5_000);
        assert_eq!(policy.max_retries(), 720);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_within_budget() {
        let calls = Arc::new(AtomicU32::new(0));
        let started = Instant::now();

        let outcome: WaitOutcome<()> = wait_until(PollPolicy::default(), || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("service not found")
            }
        })
        .await;

        let retries = calls.load(Ordering::SeqCst) - 1;
        assert_eq!(outcome, WaitOutcome::Abandoned { attempts: 721 });
        assert!(retries <= 720);
        assert!(started.elapsed() <= DEPLOY_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_after_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let started = Instant::now();

        let outcome = wait_until(PollPolicy::default(), || {
            let calls = calls.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < 3 { Err("not yet") } else { Ok(n) }
            }
        })
        .await;

        assert_eq!(outcome, WaitOutcome::Ready { value: 3, attempts: 4 });
        assert_eq!(started.elapsed(), WAIT_SERVICE_PERIOD * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_does_not_spin() {
        let policy = PollPolicy {
            timeout: DEPLOY_TIMEOUT,
            period: Duration::ZERO,
        };
        let outcome: WaitOutcome<()> = wait_until(policy, || async { Err("down") }).await;
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(policy.max_retries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_and_wait() {
        let transport = ScriptedHttpLibrary::default()
            .reply(json_response(200, r#""6f1d6d4c-9a5e-4bb5-8d43-0c3b7a0e8f11""#))
            .reply(json_response(404, r#"{"code":"404","message":"not found","success":false}"#))
            .reply(json_response(200, DETAIL_JSON));
        let config = Configuration::builder()
            .http_api(transport.clone())
            .build()
            .expect("config");
        let api = ServiceApi::new(config);
        let request =
            CreateRequest::for_ocl(&create_test_ocl(), "cn-north-4", "1-node-with-zookeeper").expect("request");

        let (id, outcome) = deploy_and_wait(&api, &request, PollPolicy::default())
            .await
            .expect("deploy");

        assert_eq!(id, "6f1d6d4c-9a5e-4bb5-8d43-0c3b7a0e8f11");
        assert_eq!(outcome.attempts(), 2);
        let entity = outcome.ready().expect("ready");
        assert_eq!(entity.service.name, "kafka");
        assert_eq!(transport.sent.lock().expect("sent").len(), 3);
    }
}
