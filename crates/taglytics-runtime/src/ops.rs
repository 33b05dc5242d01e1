//! Run orchestration: load a saved query, execute it against the right
//! endpoint and settle the dispatcher, all under one request token.

use taglytics_client::AnalysisClient;
use taglytics_store::QueryStore;
use taglytics_types::{NamedQuery, ProjectId};

use crate::dispatcher::{Dispatcher, ResultTab};
use crate::error::{Error, Result};

/// Load the n-th saved query of a project (selection index = list order)
pub fn load_saved(store: &QueryStore, project: &ProjectId, index: usize) -> Result<NamedQuery> {
    let mut queries = store.list(project)?;
    let available = queries.len();
    if index >= available {
        return Err(Error::QueryNotFound { index, available });
    }
    Ok(queries.swap_remove(index))
}

/// Execute one run for the given tab and settle the dispatcher.
///
/// The run fully resolves before anything is written back: on success
/// the result is applied under the issued token, on failure the token
/// records the message and pending is cleared. Either way the error is
/// also returned to the caller for display.
pub async fn run_query(
    client: &AnalysisClient,
    dispatcher: &mut Dispatcher,
    query: NamedQuery,
    project: &ProjectId,
    tab: ResultTab,
) -> Result<()> {
    let token = dispatcher.begin_run(query.clone(), tab);

    match tab {
        ResultTab::Percentages => match client.percentages(&query, project).await {
            Ok(result) => {
                dispatcher.apply_percentages(&token, result);
                Ok(())
            }
            Err(err) => {
                dispatcher.fail(&token, err.to_string());
                Err(err.into())
            }
        },
        ResultTab::SessionAnalysis => match client.session_analysis(&query, project).await {
            Ok(result) => {
                dispatcher.apply_analysis(&token, result);
                Ok(())
            }
            Err(err) => {
                dispatcher.fail(&token, err.to_string());
                Err(err.into())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TabView;
    use taglytics_types::{Group, Tag};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_query() -> NamedQuery {
        NamedQuery::new(
            "q1",
            vec![
                Group::new("funnel1", vec![Tag::new("signup"), Tag::new("purchase")]),
                Group::new("funnel2", vec![Tag::new("churn")]),
            ],
        )
    }

    #[test]
    fn test_load_saved_by_index() {
        let store = QueryStore::open_in_memory().unwrap();
        let project = ProjectId::from("42");
        store.save(&project, &sample_query()).unwrap();

        let loaded = load_saved(&store, &project, 0).unwrap();
        assert_eq!(loaded.name, "q1");

        let err = load_saved(&store, &project, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::QueryNotFound {
                index: 3,
                available: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_run_query_settles_percentages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/42/percentages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([33.3, 66.7])))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri()).unwrap();
        let mut dispatcher = Dispatcher::new();

        run_query(
            &client,
            &mut dispatcher,
            sample_query(),
            &ProjectId::from("42"),
            ResultTab::Percentages,
        )
        .await
        .unwrap();

        assert!(!dispatcher.is_pending());
        assert!(matches!(
            dispatcher.view(ResultTab::Percentages),
            TabView::Percentages { .. }
        ));
    }

    #[tokio::test]
    async fn test_failed_run_keeps_earlier_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/42/percentages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([33.3, 66.7])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/projects/42/analysis"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = AnalysisClient::new(server.uri()).unwrap();
        let mut dispatcher = Dispatcher::new();
        let project = ProjectId::from("42");

        run_query(
            &client,
            &mut dispatcher,
            sample_query(),
            &project,
            ResultTab::Percentages,
        )
        .await
        .unwrap();

        let err = run_query(
            &client,
            &mut dispatcher,
            sample_query(),
            &project,
            ResultTab::SessionAnalysis,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Client(_)));
        assert!(!dispatcher.is_pending());
        assert!(dispatcher.last_error().is_some());

        // Percentages stay visible, the analysis tab still asks for a run
        assert!(matches!(
            dispatcher.view(ResultTab::Percentages),
            TabView::Percentages { .. }
        ));
        assert_eq!(dispatcher.view(ResultTab::SessionAnalysis), TabView::RunFirst);
    }
}
