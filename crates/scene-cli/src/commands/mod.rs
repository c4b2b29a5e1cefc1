use anyhow::{Result, anyhow, bail};
use scene_core::page::PageView;
use scene_core::scene::{MessageId, ThemePreset};

mod setup;

pub use setup::PageSetup;

fn describe(view: &PageView) -> String {
    match view {
        PageView::Empty => "nothing to render".to_string(),
        PageView::Loading => "loading".to_string(),
        PageView::Failed => "scene failed to load".to_string(),
        PageView::Ready(ready) => format!(
            "scene {} (id {}), theme {}, visitor is {}",
            ready.scene,
            ready.record.id,
            ready.record.theme,
            if ready.role.is_owner() { "owner" } else { "guest" }
        ),
    }
}

pub async fn open(page: &PageSetup, scene: &str, query: &str) -> Result<()> {
    let (controller, history, modals) = page.controller(scene, query);
    let view = controller.mount(Some(scene), history.current_query()).await;

    println!("{}", describe(&view));
    if let Some(preset) = controller.active_theme() {
        println!("active theme: {preset}");
    }
    for modal in modals.open_modals() {
        println!("open modal: {modal}");
    }
    if let Some(entry) = history.current() {
        println!("location: {}", entry.location());
    }
    Ok(())
}

pub async fn set_theme(page: &PageSetup, scene: &str, preset: &str) -> Result<()> {
    let preset: ThemePreset = preset
        .parse()
        .map_err(|_| anyhow!("Unknown preset '{}'", preset))?;
    let (controller, history, _) = page.controller(scene, "");
    let view = controller.mount(Some(scene), history.current_query()).await;
    if view.ready().is_none() {
        bail!("{}", describe(&view));
    }

    controller.open_theme_editor().await?;
    controller.save_theme(preset).await?;
    println!("theme set to {preset}");
    Ok(())
}

pub async fn delete_message(page: &PageSetup, scene: &str, message_id: MessageId) -> Result<()> {
    let (controller, history, _) = page.controller(scene, "");
    let view = controller.mount(Some(scene), history.current_query()).await;
    if view.ready().is_none() {
        bail!("{}", describe(&view));
    }

    controller.long_press_message(message_id).await;
    match controller.confirm_message_delete().await {
        Some(id) => println!("delete requested for message {id}"),
        None => println!("no message selected"),
    }
    Ok(())
}

pub async fn primary(page: &PageSetup, scene: &str) -> Result<()> {
    let (controller, history, _) = page.controller(scene, "");
    controller.mount(Some(scene), history.current_query()).await;

    match controller.primary_action().await {
        Some(action) => {
            tracing::debug!(?action, "primary action");
            if let Some(entry) = history.current() {
                println!("location: {}", entry.location());
            }
        }
        None => println!("nothing to render"),
    }
    Ok(())
}
