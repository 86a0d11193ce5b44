use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use trainer_core::ScoringRules;
use trainer_core::model::{Difficulty, Vocabulary, VocabularyEntry};

use crate::context::{UiApp, build_app_context};
use crate::vm::TrainerIntent;

use super::trainer::{render_trainer, use_trainer_state};

struct TestApp {
    vocabulary: Arc<Vocabulary>,
    rules: ScoringRules,
}

impl UiApp for TestApp {
    fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    fn scoring_rules(&self) -> ScoringRules {
        self.rules
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<TrainerIntent>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<TrainerIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }
}

impl PartialEq for HarnessHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatch, &other.dispatch)
    }
}

#[derive(Props, Clone)]
struct TrainerRootProps {
    app: Arc<TestApp>,
    handles: HarnessHandles,
}

impl PartialEq for TrainerRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TrainerRoot(props: TrainerRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RegisteredTrainer { handles: props.handles.clone() } }
}

#[component]
fn RegisteredTrainer(handles: HarnessHandles) -> Element {
    let trainer = use_trainer_state();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.dispatch.borrow_mut() = Some(trainer.dispatch);
    }
    render_trainer(trainer)
}

pub struct TrainerHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl TrainerHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Sends `intent` through the view's dispatcher and flushes the rerender.
    pub fn send(&mut self, intent: TrainerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mounts the trainer view over `(english, finnish)` pairs.
pub fn setup_trainer_harness(words: &[(&str, &str)], rules: ScoringRules) -> TrainerHarness {
    let entries = words
        .iter()
        .map(|(english, finnish)| {
            VocabularyEntry::new(*english, *finnish, Difficulty::Easy, "noun", "The ___ is here.")
                .expect("valid entry")
        })
        .collect();
    let app = Arc::new(TestApp {
        vocabulary: Arc::new(Vocabulary::new(entries).expect("non-empty vocabulary")),
        rules,
    });

    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        TrainerRoot,
        TrainerRootProps {
            app,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    TrainerHarness { dom, handles }
}
