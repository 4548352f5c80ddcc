//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_admin, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh member and return their auth bundle
async fn register_member(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Seed an admin account and log them in
async fn login_admin(server: &TestServer) -> AuthResponse {
    let credentials = seed_admin().await.expect("Failed to seed admin");
    let login = LoginRequest::from_register(&credentials);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// Create an article as the given admin and return it
async fn create_article(server: &TestServer, admin_token: &str) -> ArticleResponse {
    let request = CreateArticleRequest::unique();
    let response = server
        .post_auth("/api/v1/articles", admin_token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.member.username, request.username);
    assert_eq!(auth.member.email, request.email);
    assert!(!auth.member.is_admin);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    // Second registration with same email
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_digits_in_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.username = format!("{}9", request.username);

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error.code, "INVALID_USERNAME");
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_member(&server).await;

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.member.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_member(&server).await;

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "wrongpassword".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());
    assert_eq!(refreshed.member.id, auth.member.id);
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_list_members_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_member(&server).await;

    // No Authorization header
    let response = server.get("/api/v1/members?limit=100").await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(members.iter().any(|m| m.username == register_req.username));
}

#[tokio::test]
async fn test_get_current_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_member(&server).await;

    let response = server
        .get_auth("/api/v1/members/@me", &auth.access_token)
        .await
        .unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(member.id, auth.member.id);
    assert_eq!(member.username, register_req.username);
}

#[tokio::test]
async fn test_get_current_member_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/members/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Article Tests
// ============================================================================

#[tokio::test]
async fn test_create_article_as_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let request = CreateArticleRequest::unique();
    let response = server
        .post_auth("/api/v1/articles", &admin.access_token, &request)
        .await
        .unwrap();
    let article: ArticleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(article.title, request.title);
    assert_eq!(article.author.id, admin.member.id);
    // Slug is derived from the title
    assert_eq!(article.slug, request.title.to_lowercase().replace(' ', "-"));
}

#[tokio::test]
async fn test_create_article_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    let request = CreateArticleRequest::unique();
    let response = server
        .post_auth("/api/v1/articles", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_article_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateArticleRequest::unique();
    let response = server.post("/api/v1/articles", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_article_validates_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let mut request = CreateArticleRequest::unique();
    request.title = String::new();

    let response = server
        .post_auth("/api/v1/articles", &admin.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_duplicate_titles_get_suffixed_slugs() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let request = CreateArticleRequest::unique();
    let base_slug = request.title.to_lowercase().replace(' ', "-");

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/articles", &admin.access_token, &request)
            .await
            .unwrap();
        let article: ArticleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        slugs.push(article.slug);
    }

    assert_eq!(slugs[0], base_slug);
    assert_eq!(slugs[1], format!("{base_slug}-1"));
    assert_eq!(slugs[2], format!("{base_slug}-2"));
}

#[tokio::test]
async fn test_get_article_by_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let created = create_article(&server, &admin.access_token).await;

    // Public read, no token
    let response = server
        .get(&format!("/api/v1/articles/{}", created.slug))
        .await
        .unwrap();
    let article: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(article.id, created.id);
    assert_eq!(article.slug, created.slug);
}

#[tokio::test]
async fn test_get_article_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/articles/no-such-article-slug")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_article_regenerates_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let created = create_article(&server, &admin.access_token).await;

    let new_title = format!("Renamed {}", letter_suffix());
    let update = UpdateArticleRequest {
        title: Some(new_title.clone()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/v1/articles/{}", created.slug),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, new_title);
    assert_eq!(updated.slug, new_title.to_lowercase().replace(' ', "-"));

    // The old slug no longer resolves
    let response = server
        .get(&format!("/api/v1/articles/{}", created.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_article_forbidden_for_non_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let created = create_article(&server, &admin.access_token).await;

    let (_, stranger) = register_member(&server).await;
    let update = UpdateArticleRequest {
        summary: Some("Rewritten by someone else".to_string()),
        ..Default::default()
    };
    let response = server
        .put_auth(
            &format!("/api/v1/articles/{}", created.slug),
            &stranger.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_article() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let created = create_article(&server, &admin.access_token).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/articles/{}", created.slug),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/articles/{}", created.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_post_comment_and_read_tree() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    let comment_req = CreateCommentRequest::simple("A perfectly fine comment");
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &comment_req,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(comment.content, comment_req.content);
    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.author.id, auth.member.id);
    assert!(comment.parent_id.is_none());
    assert!((comment.average_note - 0.0).abs() < f64::EPSILON);

    // Public tree read
    let response = server
        .get(&format!("/api/v1/articles/{}/comments", article.slug))
        .await
        .unwrap();
    let tree: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, comment.id);
    assert!(tree[0].children.is_empty());
}

#[tokio::test]
async fn test_comment_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let comment_req = CreateCommentRequest::simple("Posted without a token");
    let response = server
        .post(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &comment_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_comment_content_too_short() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    let comment_req = CreateCommentRequest::simple("hi");
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &comment_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reply_threading() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, alice) = register_member(&server).await;
    let (_, bob) = register_member(&server).await;

    // Alice posts a top-level comment
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &alice.access_token,
            &CreateCommentRequest::simple("Top level comment"),
        )
        .await
        .unwrap();
    let root: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Bob replies to Alice
    let response = server
        .post_auth(
            &format!("/api/v1/comments/{}/replies", root.id),
            &bob.access_token,
            &CreateCommentRequest::simple("A reply to the top level"),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(reply.parent_id.as_deref(), Some(root.id.as_str()));
    assert_eq!(reply.article_id, article.id);
    assert_eq!(reply.author.id, bob.member.id);

    // The tree nests the reply under the root
    let response = server
        .get(&format!("/api/v1/articles/{}/comments", article.slug))
        .await
        .unwrap();
    let tree: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id, reply.id);
}

#[tokio::test]
async fn test_update_comment_as_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &CreateCommentRequest::simple("First draft of a comment"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateCommentRequest {
        content: "Second draft of a comment".to_string(),
    };
    let response = server
        .put_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &auth.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, comment.id);
    assert_eq!(updated.content, update.content);
}

#[tokio::test]
async fn test_update_comment_forbidden_for_stranger() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, owner) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &owner.access_token,
            &CreateCommentRequest::simple("Belongs to the owner"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let (_, stranger) = register_member(&server).await;
    let update = UpdateCommentRequest {
        content: "Hijacked by a stranger".to_string(),
    };
    let response = server
        .put_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &stranger.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_can_delete_any_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, owner) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &owner.access_token,
            &CreateCommentRequest::simple("Scheduled for moderation"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/comments/{}", comment.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_comment_removes_reply_subtree() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &CreateCommentRequest::simple("Root of a doomed subtree"),
        )
        .await
        .unwrap();
    let root: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/comments/{}/replies", root.id),
            &auth.access_token,
            &CreateCommentRequest::simple("Reply that goes down with it"),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", root.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    // Both the root and the reply are gone
    let response = server
        .get(&format!("/api/v1/comments/{}", root.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get(&format!("/api/v1/comments/{}", reply.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_article_cascades_to_comments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &CreateCommentRequest::simple("Attached to a doomed article"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/articles/{}", article.slug),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/comments/{}", comment.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_flat_comment_list_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, auth) = register_member(&server).await;
    server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &auth.access_token,
            &CreateCommentRequest::simple("Visible to moderators"),
        )
        .await
        .unwrap();

    // Regular members are rejected
    let response = server
        .get_auth("/api/v1/comments", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Unauthenticated calls are rejected
    let response = server.get("/api/v1/comments").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // Admins see the flat list
    let response = server
        .get_auth("/api/v1/comments?limit=100", &admin.access_token)
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!comments.is_empty());
}

#[tokio::test]
async fn test_get_comment_invalid_id_format() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/comments/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Note Tests
// ============================================================================

#[tokio::test]
async fn test_rating_updates_average() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, author) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &author.access_token,
            &CreateCommentRequest::simple("Rate this comment"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Three raters, values 3, 4, 5
    let mut last_average = 0.0;
    for value in [3, 4, 5] {
        let (_, rater) = register_member(&server).await;
        let response = server
            .post_auth(
                &format!("/api/v1/comments/{}/notes", comment.id),
                &rater.access_token,
                &CreateNoteRequest { value },
            )
            .await
            .unwrap();
        let rated: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        last_average = rated.average_note;
    }

    assert!((last_average - 4.0).abs() < f64::EPSILON);

    // The public read sees the same average
    let response = server
        .get(&format!("/api/v1/comments/{}", comment.id))
        .await
        .unwrap();
    let fetched: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!((fetched.average_note - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_rating_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let article = create_article(&server, &admin.access_token).await;

    let (_, author) = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/articles/{}/comments", article.slug),
            &author.access_token,
            &CreateCommentRequest::simple("Unrated comment"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/comments/{}/notes", comment.id),
            &CreateNoteRequest { value: 5 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rating_missing_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_member(&server).await;

    let response = server
        .post_auth(
            "/api/v1/comments/1/notes",
            &auth.access_token,
            &CreateNoteRequest { value: 5 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
