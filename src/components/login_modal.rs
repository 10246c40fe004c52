use leptos::prelude::*;
use tracing::{info, warn};

use crate::app::SessionContext;
use crate::assets;

#[component]
pub fn LoginModal() -> impl IntoView {
    let SessionContext { session, .. } = expect_context::<SessionContext>();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move || {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        match session.try_update(|s| s.login(&user, &pass)) {
            Some(Ok(())) => {
                info!("Admin mode enabled");
                set_username.set(String::new());
                set_password.set(String::new());
            }
            Some(Err(e)) => {
                warn!("Login rejected: {}", e);
                assets::alert("Invalid credentials!");
            }
            None => {}
        }
    };

    let close = move |_| session.update(|s| s.close_login());

    view! {
        <Show when=move || session.with(|s| s.show_login())>
            <div class="modal-backdrop" on:click=close>
                <div class="modal login-modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Not Your Place"</h3>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }>
                        <input
                            type="text"
                            class="input"
                            placeholder="Username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary">"Begin"</button>
                            <button type="button" class="btn btn-secondary" on:click=close>
                                "Close"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
