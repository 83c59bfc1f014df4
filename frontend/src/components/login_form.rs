use shared::{LoginRequest, LoginResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

const INCOMPLETE: &str = "Enter your username and password";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api_client: ApiClient,
    pub on_login: Callback<LoginResponse>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_login = props.on_login.clone();
        let username = username.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest::new(&username, &password);
            if !request.is_complete() {
                error_message.set(Some(INCOMPLETE.to_string()));
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let api_client = api_client.clone();
            let on_login = on_login.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            spawn_local(async move {
                let result = api_client.login(&request).await;
                is_submitting.set(false);
                match result {
                    Ok(response) => {
                        Logger::info_with_component("login", &format!("Signed in as user {}", response.id));
                        on_login.emit(response);
                    }
                    Err(ApiError::Status { status: status @ 400..=499, .. }) => {
                        Logger::warn_with_component("login", &format!("Login rejected with status {}", status));
                        error_message.set(Some(INVALID_CREDENTIALS.to_string()));
                    }
                    Err(e) => {
                        Logger::error_with_component("login", &format!("Login failed: {}", e));
                        error_message.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <form class="login-form" onsubmit={on_submit} novalidate={true}>
                <h2>{"Sign in"}</h2>
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="login-username">{"Username"}</label>
                    <input
                        id="login-username"
                        type="text"
                        autocomplete="username"
                        value={(*username).clone()}
                        oninput={on_username}
                        disabled={*is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">{"Password"}</label>
                    <input
                        id="login-password"
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={*is_submitting}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod wasm_tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlFormElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_blank_credentials_never_reach_the_api() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let logged_in = Rc::new(Cell::new(false));
        let on_login = {
            let logged_in = logged_in.clone();
            Callback::from(move |_: LoginResponse| logged_in.set(true))
        };
        yew::Renderer::<LoginForm>::with_root_and_props(
            root.clone(),
            LoginFormProps {
                api_client: ApiClient::with_base_url("http://127.0.0.1:9".to_string()),
                on_login,
            },
        )
        .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        root.query_selector("form")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap()
            .request_submit()
            .unwrap();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let error = root.query_selector(".form-error").unwrap().unwrap();
        assert_eq!(error.text_content().unwrap(), INCOMPLETE);
        assert!(!logged_in.get());
        let button = root.query_selector("button[type=submit]").unwrap().unwrap();
        assert_eq!(button.text_content().unwrap(), "Sign in");
    }
}
