// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive authorization flow tests with a scripted browser collaborator.

use walkrun_core::{AuthorizationFlow, Config, Error, OAuthTokenStore, Result};

/// Browser collaborator that records the URL it was asked to open and
/// resolves with a canned callback.
struct ScriptedBrowser {
    callback: Result<String>,
}

impl AuthorizationFlow for ScriptedBrowser {
    async fn authorize(&self, auth_url: &str, callback_scheme: &str) -> Result<String> {
        assert!(auth_url.contains("response_type=code"));
        assert_eq!(callback_scheme, "walkrun");
        match &self.callback {
            Ok(url) => Ok(url.clone()),
            Err(_) => Err(Error::Authorization("User cancelled".to_string())),
        }
    }
}

fn test_store(dir: &tempfile::TempDir) -> OAuthTokenStore {
    OAuthTokenStore::new(&Config::default(), dir.path().join("credential.json"))
}

#[tokio::test]
async fn test_begin_authorization_extracts_code() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);
    let browser = ScriptedBrowser {
        callback: Ok("walkrun://callback?state=abc&code=auth_code_42&scope=activity:write".into()),
    };

    let code = store.begin_authorization(&browser).await.unwrap();
    assert_eq!(code, "auth_code_42");
}

#[tokio::test]
async fn test_begin_authorization_without_code_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);
    let browser = ScriptedBrowser {
        callback: Ok("walkrun://callback?error=access_denied".into()),
    };

    let err = store.begin_authorization(&browser).await.unwrap_err();
    assert!(matches!(err, Error::Authorization(_)));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_cancelled_authorization_surfaces_and_leaves_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    let store = test_store(&dir);
    let browser = ScriptedBrowser {
        callback: Err(Error::Authorization("User cancelled".to_string())),
    };

    let err = store.begin_authorization(&browser).await.unwrap_err();
    assert!(matches!(err, Error::Authorization(_)));
    assert!(!store.is_authenticated());
}
