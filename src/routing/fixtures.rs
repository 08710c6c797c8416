//! Canned HTML fragments served by the built-in routes.
//!
//! Each body is written out byte-for-byte as the demo page expects it.

/// `GET /alert`
pub const ALERT_HTML: &str = r#"<div class="alert success">
    <div>
        <p><strong>Success!</strong> The operation completed successfully.</p>
    </div>
</div>"#;

/// `GET /card`
pub const CARD_HTML: &str = r#"<div class="card elevated">
    <div class="card-header">
        <h3 class="card-title">Dynamic Content</h3>
    </div>
    <div class="card-body">
        <p>This card was loaded dynamically via HTMX from the mock server.</p>
        <p>You can use this pattern to load card content on-demand, reducing initial page load time.</p>
    </div>
    <div class="card-footer">
        <button class="btn primary">Take Action</button>
        <button class="btn">Dismiss</button>
    </div>
</div>"#;

/// `GET /modal`
pub const MODAL_HTML: &str = r#"<div class="modal" id="modal-htmx" open>
    <div class="modal-backdrop"></div>
    <div class="modal-content">
        <div class="modal-header">
            <h2 class="modal-title">Dynamically Loaded Modal</h2>
            <button class="modal-close" aria-label="Close"></button>
        </div>
        <div class="modal-body">
            <p>This modal was loaded dynamically via HTMX from the mock server.</p>
            <p>The proximity.js script automatically initializes it with keyboard handling, focus trapping, and click-outside detection.</p>
        </div>
        <div class="modal-footer">
            <button class="btn primary">Confirm</button>
            <button class="btn" data-modal-close>Cancel</button>
        </div>
    </div>
</div>"#;

/// `GET /tab-content`
pub const TAB_CONTENT_HTML: &str = r#"<div>
    <h3>Dynamically Loaded Content</h3>
    <p>This content was loaded via HTMX when you clicked the tab.</p>
    <p>The JavaScript handles showing and hiding the panel, while HTMX fetches the content on the first click.</p>
    <p>This pattern is useful for lazy-loading tab content that might be expensive to render upfront.</p>
</div>"#;

/// `GET /toast-trigger`
pub const TOAST_HTML: &str =
    r#"<p style="color: var(--color-success);">&#10003; Server response received</p>"#;

/// `POST /save`. Swapped into both the button and the form demo.
pub const SAVE_TEXT: &str = "Saved successfully!";

pub const TOAST_MESSAGE: &str = "Operation completed successfully!";
pub const TOAST_TYPE: &str = "success";
pub const TOAST_DURATION_MS: &str = "5000";

/// Value of `Access-Control-Expose-Headers` on the toast route.
pub const TOAST_EXPOSED_HEADERS: &str = "X-Toast-Message, X-Toast-Type, X-Toast-Duration";
