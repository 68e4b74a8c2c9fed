use handlebars::Handlebars;
use serde_json::json;

use crate::error::Result;
use crate::page::{FollowControl, PostCard};

const POST_CARD_TEMPLATE: &str = r#"<div class="card mb-3">
  <div class="card-body">
    {{#if editing}}<textarea class="form-control">{{draft}}</textarea>{{else}}<p class="card-text" id="post-{{id}}">{{text}}</p>{{/if}}
    <small class="text-muted">{{created}} by <a href="{{author_href}}">{{author}}</a><small class="text-muted" id="post-edited-{{id}}">{{edited_marker}}</small></small>
    <div class="mt-2">
      <button class="btn btn-sm like-button{{#if liked}} liked{{/if}}{{#if like_disabled}} disabled{{/if}}" data-post-id="{{id}}"{{#if like_disabled}} disabled aria-disabled="true"{{/if}}{{#if like_title}} title="{{like_title}}"{{/if}}>{{like_label}}</button>
      {{#if edit}}{{#if editing}}<button class="btn btn-sm btn-primary mt-2"{{#if edit.saving}} disabled{{/if}}>Save</button>{{/if}}<button class="btn btn-sm btn-outline-secondary edit-button" data-post-id="{{id}}" data-post-text="{{edit.post_text}}"{{#unless edit.visible}} style="display: none"{{/unless}}>✏️ Edit</button>{{/if}}
    </div>
  </div>
</div>"#;

const FOLLOW_TEMPLATE: &str = r#"<button class="btn {{style}} follow-button" data-username="{{username}}" data-following="{{following}}"{{#if busy}} disabled{{/if}}>{{label}}</button>
<span id="num_followers">{{followers_label}}</span>"#;

/// 把页面状态渲染成与服务端模板一致的 HTML 片段，内容统一转义
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string("post_card", POST_CARD_TEMPLATE)?;
        registry.register_template_string("follow", FOLLOW_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn post_card(&self, card: &PostCard) -> Result<String> {
        let data = json!({
            "id": card.id,
            "text": card.text,
            "author": card.author,
            "author_href": card.author_href,
            "created": card.created_display,
            "edited_marker": card.edited_marker(),
            "editing": card.is_editing(),
            "draft": card.draft(),
            "liked": card.like.liked,
            "like_label": card.like.label(),
            "like_disabled": card.like.is_disabled(),
            "like_title": card.like.title(),
            "edit": card.edit,
        });
        Ok(self.registry.render("post_card", &data)?)
    }

    pub fn follow_control(&self, control: &FollowControl) -> Result<String> {
        let data = json!({
            "username": control.username,
            "following": control.following,
            "busy": control.busy,
            "style": control.style(),
            "label": control.label(),
            "followers_label": control.followers_label(),
        });
        Ok(self.registry.render("follow", &data)?)
    }
}
