//! Authentication Pages
//!
//! Login, registration and the landing page of the Google OAuth redirect.

use leptos::*;
use leptos_router::*;

use lingulu::auth::{
    complete_oauth, submit_login, submit_register, Authenticated, Field, FieldErrors, LoginAction,
    LoginForm, OAuthFailure, RegisterAction, RegisterForm, SubmitAction, SubmitError,
    ERROR_QUERY_KEY,
};

use crate::api;
use crate::components::{FieldError, InlineLoading, Loading};
use crate::state::{GlobalState, LocalStorageSessionStore};

const INPUT_CLASS: &str = "w-full bg-white rounded-xl px-4 py-3 border border-gray-300 \
                           focus:border-sky-500 focus:outline-none";

/// Map a finished submit onto the form's outcome action
fn outcome(result: &Result<Authenticated, SubmitError>) -> SubmitAction {
    match result {
        Ok(_) => SubmitAction::Succeeded,
        Err(SubmitError::Invalid(errors)) => SubmitAction::ValidationFailed(errors.clone()),
        Err(e) => SubmitAction::Failed(e.message().unwrap_or_default()),
    }
}

fn field_message(errors: &FieldErrors, field: Field) -> Option<String> {
    errors.get(field).map(str::to_string)
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let form = create_rw_signal(LoginForm::new());
    let dispatch = move |action: LoginAction| {
        form.update(|f| *f = std::mem::take(f).reduce(action));
    };

    let query = use_query_map();
    let oauth_failure = move || {
        query.with(|q| q.get(ERROR_QUERY_KEY).and_then(|code| OAuthFailure::from_code(code)))
    };

    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = form.with_untracked(LoginForm::credentials);
        dispatch(LoginAction::Submit(SubmitAction::Started));

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = submit_login(&api::client(), &LocalStorageSessionStore, &credentials).await;
            dispatch(LoginAction::Submit(outcome(&result)));
            match result {
                Ok(auth) => navigate(&auth.navigation.href(), Default::default()),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Login failed: {}", e).into());
                }
            }
        });
    };

    let google_url = api::client().google_authorization_url();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-sky-600">"Welcome Back"</h1>
                    <p class="text-gray-500 mt-1">"Log in to continue learning"</p>
                </div>

                {move || oauth_failure().map(|failure| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 rounded-xl px-4 py-3 text-sm">
                        {failure.message()}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Email"</label>
                        <input
                            type="email"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| dispatch(LoginAction::EmailChanged(event_target_value(&ev)))
                        />
                        <FieldError message=Signal::derive(move || form.with(|f| field_message(&f.errors, Field::Email))) />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| dispatch(LoginAction::PasswordChanged(event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-3 text-gray-400"
                                on:click=move |_| dispatch(LoginAction::TogglePassword)
                            >
                                {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <FieldError message=Signal::derive(move || form.with(|f| field_message(&f.errors, Field::Password))) />
                    </div>

                    <FieldError message=Signal::derive(move || form.with(|f| field_message(&f.errors, Field::Submit))) />

                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.submitting)
                        class="w-full py-3 bg-sky-600 hover:bg-sky-700 disabled:bg-sky-300 text-white
                               rounded-xl font-semibold transition-colors"
                    >
                        {move || if form.with(|f| f.submitting) {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            "Log In".into_view()
                        }}
                    </button>
                </form>

                <a
                    href=google_url
                    class="flex items-center justify-center space-x-2 w-full py-3 border border-gray-300
                           rounded-xl font-medium hover:bg-gray-50"
                >
                    <span>"G"</span>
                    <span>"Continue with Google"</span>
                </a>

                <p class="text-center text-sm text-gray-500">
                    "Don't have an account? "
                    <A href="/register" class="text-sky-600 font-semibold">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let form = create_rw_signal(RegisterForm::new());
    let dispatch = move |action: RegisterAction| {
        form.update(|f| *f = std::mem::take(f).reduce(action));
    };
    let error_for = move |field: Field| {
        Signal::derive(move || form.with(|f| field_message(&f.errors, field)))
    };

    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let registration = form.with_untracked(RegisterForm::registration);
        dispatch(RegisterAction::Submit(SubmitAction::Started));

        let navigate = navigate.clone();
        spawn_local(async move {
            let result =
                submit_register(&api::client(), &LocalStorageSessionStore, &registration).await;
            dispatch(RegisterAction::Submit(outcome(&result)));
            match result {
                Ok(auth) => navigate(&auth.navigation.href(), Default::default()),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Registration failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-sky-600">"Create Account"</h1>
                    <p class="text-gray-500 mt-1">"Start learning English with Lingulu"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Username"</label>
                        <input
                            type="text"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| dispatch(RegisterAction::UsernameChanged(event_target_value(&ev)))
                        />
                        <FieldError message=error_for(Field::Username) />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Email"</label>
                        <input
                            type="email"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| dispatch(RegisterAction::EmailChanged(event_target_value(&ev)))
                        />
                        <FieldError message=error_for(Field::Email) />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| dispatch(RegisterAction::PasswordChanged(event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-3 text-gray-400"
                                on:click=move |_| dispatch(RegisterAction::TogglePassword)
                            >
                                {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <FieldError message=error_for(Field::Password) />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Confirm Password"</label>
                        <div class="relative">
                            <input
                                type=move || if form.with(|f| f.show_confirm_password) { "text" } else { "password" }
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                                on:input=move |ev| dispatch(RegisterAction::ConfirmPasswordChanged(event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-3 text-gray-400"
                                on:click=move |_| dispatch(RegisterAction::ToggleConfirmPassword)
                            >
                                {move || if form.with(|f| f.show_confirm_password) { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <FieldError message=error_for(Field::ConfirmPassword) />
                    </div>

                    <label class="flex items-center space-x-2 text-sm text-gray-600">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.agree_to_terms)
                            on:change=move |ev| dispatch(RegisterAction::TermsChanged(event_target_checked(&ev)))
                        />
                        <span>"I agree to the terms & privacy policy"</span>
                    </label>
                    <FieldError message=error_for(Field::Terms) />

                    <FieldError message=error_for(Field::Submit) />

                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.submitting)
                        class="w-full py-3 bg-sky-600 hover:bg-sky-700 disabled:bg-sky-300 text-white
                               rounded-xl font-semibold transition-colors"
                    >
                        {move || if form.with(|f| f.submitting) {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            "Sign Up".into_view()
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-500">
                    "Already have an account? "
                    <A href="/login" class="text-sky-600 font-semibold">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

/// Landing page of the server-side Google OAuth flow
///
/// Fetches the session once on mount and replaces itself with the next page.
#[component]
pub fn OAuthSuccess() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    spawn_local(async move {
        let navigation = complete_oauth(&api::client(), &LocalStorageSessionStore).await;
        if navigation.query_value(ERROR_QUERY_KEY).is_none() {
            state.show_success("Signed in with Google");
        }
        navigate(
            &navigation.href(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center">
            <Loading />
            <p class="text-gray-500">"Completing sign-in..."</p>
        </div>
    }
}
