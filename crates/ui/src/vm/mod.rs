mod trainer_vm;

pub use trainer_vm::{
    CompletionVm, FeedbackVm, HintVm, TrainerIntent, TrainerVm, apply_intent,
};
