use dioxus::prelude::*;

/// Keyed wrapper around the routed subtree. Changing `lang` remounts every
/// child, so components whose props did not change (list items, badges) still
/// pick up strings from the newly selected language.
#[component]
pub fn LocaleScope(lang: String, children: Element) -> Element {
    // Rendered as a one-element keyed list so a new key replaces the node.
    rsx! {
        for code in [lang] {
            div { key: "{code}", class: "locale-scope",
                div { style: "display:none", "{code}" }
                {children.clone()}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{ScopeId, VirtualDom};
    use std::cell::{Cell, RefCell};

    thread_local! {
        static LANG: RefCell<String> = RefCell::new("en-US".to_string());
        static MOUNTS: Cell<u32> = const { Cell::new(0) };
    }

    #[component]
    fn MountCounter() -> Element {
        use_hook(|| MOUNTS.with(|m| m.set(m.get() + 1)));
        rsx! { span { "child" } }
    }

    #[component]
    fn Root() -> Element {
        let lang = LANG.with(|l| l.borrow().clone());
        rsx! {
            LocaleScope { lang: lang, MountCounter {} }
        }
    }

    fn rerender(dom: &mut VirtualDom) {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
    }

    #[test]
    fn language_change_remounts_children() {
        LANG.with(|l| *l.borrow_mut() = "en-US".into());
        MOUNTS.with(|m| m.set(0));

        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();
        assert_eq!(MOUNTS.with(Cell::get), 1);

        rerender(&mut dom);
        assert_eq!(MOUNTS.with(Cell::get), 1, "same language keeps the subtree");

        LANG.with(|l| *l.borrow_mut() = "es-ES".into());
        rerender(&mut dom);
        assert_eq!(MOUNTS.with(Cell::get), 2);
        assert!(dioxus_ssr::render(&dom).contains("es-ES"));
    }
}
