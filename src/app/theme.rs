use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

/// Site-wide light/dark choice. Persisted in local storage once hydrated.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggle());
    }
}

/// Starts from `Theme::default()` in both builds so hydration matches the
/// server markup. The stored choice is applied once hydration is done.
pub fn provide_theme() -> ThemeContext {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

        Effect::watch(
            || (),
            move |_, _, _| {
                let stored = stored.get_untracked();
                if stored != theme.get_untracked() {
                    set_theme.set(stored);
                }
            },
            true,
        );

        Effect::watch(
            move || theme.get(),
            move |theme, _, _| set_stored.set(*theme),
            false,
        );
    }

    let ctx = ThemeContext {
        theme: theme.into(),
        set_theme,
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_first_render_uses_server_default() {
        Owner::new().with(|| {
            let ctx = provide_theme();
            assert_eq!(ctx.get_untracked(), Theme::default());
            assert_eq!(use_theme().get_untracked(), Theme::default());

            ctx.toggle();
            assert_eq!(use_theme().get_untracked(), Theme::default().toggle());
        });
    }
}
