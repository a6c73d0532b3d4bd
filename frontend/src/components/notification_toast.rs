use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::notifications::Notifications;

const TOAST_TIMEOUT_MS: u32 = 5_000;

/// Shows the latest [`Notifications`] message until it times out or is closed.
#[component]
pub fn NotificationToast() -> Element {
    let notifications = use_context::<Notifications>();
    let mut dismiss_task = use_signal(|| None::<Task>);

    use_effect(move || {
        let shown = notifications.message.read().is_some();
        if let Some(task) = dismiss_task.write().take() {
            task.cancel();
        }
        if shown {
            let task = spawn(async move {
                TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                notifications.dismiss();
            });
            dismiss_task.set(Some(task));
        }
    });

    let Some(text) = notifications.message.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "x-notification-toast",
            style: "
                position: absolute;
                bottom: 24px;
                left: 50%;
                transform: translateX(-50%);
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 10px 16px;
                border-radius: 8px;
                background: #7F1D1D;
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.2);
                z-index: 10;
            ",
            span { "{text}" }
            button {
                style: "background: transparent; border: none; color: white; cursor: pointer;",
                onclick: move |_| notifications.dismiss(),
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
            }
        }
    }
}
