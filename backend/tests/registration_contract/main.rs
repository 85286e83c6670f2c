//! Contract tests for the registration workflow's public surface.
//!
//! The workflow is wired with recording doubles so each test can assert on
//! the calls it made, the events it logged and the errors it raised, in
//! addition to the uniform result it returned.

mod doubles;

use std::sync::Arc;

use doubles::{
    Level, RecordingErrorChannel, RecordingLogger, RecordingNewsletter, RecordingUserRepository,
};
use registration::domain::ports::{
    NewsletterError, SubscriptionReceipt, UserRegistration, UserRepositoryError,
};
use registration::domain::{
    AppCode, CodedError, HttpStatus, REGISTER_SCOPE, RegistrationRequest, RegistrationResult,
    RegistrationService, User, UserId,
};
use registration::outbound::{InMemoryNewsletter, InMemoryUserRepository};
use rstest::{fixture, rstest};
use serde_json::json;

const NAME: &str = "John Doe";
const EMAIL: &str = "test@test.com";

type RecordedService = RegistrationService<
    RecordingUserRepository,
    RecordingNewsletter,
    RecordingLogger,
    RecordingErrorChannel,
>;

struct World {
    users: RecordingUserRepository,
    newsletter: RecordingNewsletter,
    logger: RecordingLogger,
    errors: RecordingErrorChannel,
}

impl World {
    fn service(&self) -> RecordedService {
        RegistrationService::new(
            Arc::new(self.users.clone()),
            Arc::new(self.newsletter.clone()),
            Arc::new(self.logger.clone()),
            Arc::new(self.errors.clone()),
        )
    }
}

fn mock_user() -> User {
    User::new(UserId::new(1), NAME, EMAIL)
}

#[fixture]
fn world() -> World {
    World {
        users: RecordingUserRepository::new(Ok(mock_user())),
        newsletter: RecordingNewsletter::new(Ok(SubscriptionReceipt::success())),
        logger: RecordingLogger::default(),
        errors: RecordingErrorChannel::default(),
    }
}

#[fixture]
fn rejecting_world(world: World) -> World {
    World {
        users: RecordingUserRepository::new(Err(UserRepositoryError::validation(
            "Name is required",
        ))),
        ..world
    }
}

fn assert_raised_once(errors: &RecordingErrorChannel) {
    let raised = errors.raised();
    assert_eq!(raised.len(), 1, "raise must be invoked exactly once");
    let error = &raised[0];
    assert_eq!(error.http_status(), HttpStatus::InternalServerError);
    assert_eq!(error.http_status().as_u16(), 500);
    assert_eq!(error.app_code(), AppCode::RegisterUserFailed);
    assert_eq!(error.message(), "failed to register user");
}

#[rstest]
#[tokio::test]
async fn successful_registration_returns_success_message(world: World) {
    let result = world.service().register(NAME, EMAIL).await;

    assert_eq!(result, RegistrationResult::success());
    assert_eq!(
        world.users.calls(),
        vec![(NAME.to_owned(), EMAIL.to_owned())]
    );
    assert_eq!(world.newsletter.calls(), vec![mock_user()]);
    assert!(world.errors.raised().is_empty());

    let events = world.logger.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::Info);
    assert_eq!(events[0].scope, REGISTER_SCOPE);
    assert_eq!(events[0].app_code, AppCode::RegisterUserSuccess);
    assert_eq!(
        events[0].context,
        json!({ "user": { "id": 1, "name": NAME, "email": EMAIL, "role": "user" } })
    );
}

#[rstest]
#[tokio::test]
async fn missing_name_returns_failure_and_raises(rejecting_world: World) {
    let world = rejecting_world;

    let result = world.service().register("", EMAIL).await;

    assert_eq!(result.msg(), "failed to register user");
    assert_eq!(world.users.calls(), vec![(String::new(), EMAIL.to_owned())]);
    assert!(world.newsletter.calls().is_empty());
    assert_raised_once(&world.errors);

    let events = world.logger.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::Error);
    assert_eq!(events[0].app_code, AppCode::RegisterUserFailed);
    assert_eq!(events[0].context["stage"], "repository");
    assert_eq!(events[0].context["kind"], "validation");
}

#[rstest]
#[tokio::test]
async fn newsletter_failure_returns_the_same_failure(world: World) {
    let world = World {
        newsletter: RecordingNewsletter::new(Err(NewsletterError::rejected("bounced"))),
        ..world
    };

    let result = world.service().register(NAME, EMAIL).await;

    assert_eq!(result, RegistrationResult::failure());
    assert_eq!(world.users.calls().len(), 1);
    assert_eq!(world.newsletter.calls().len(), 1);
    assert_raised_once(&world.errors);
    assert_eq!(world.logger.events()[0].context["stage"], "newsletter");
}

#[rstest]
#[tokio::test]
async fn repeated_calls_reach_the_repository_each_time(world: World) {
    let service = world.service();

    service.register(NAME, EMAIL).await;
    service.register(NAME, EMAIL).await;

    assert_eq!(world.users.calls().len(), 2);
    assert_eq!(world.newsletter.calls().len(), 2);
}

#[rstest]
#[tokio::test]
async fn a_failure_does_not_poison_later_calls(world: World) {
    let world = World {
        users: world
            .users
            .clone()
            .then_answer(Err(UserRepositoryError::connection("refused"))),
        ..world
    };
    let service = world.service();

    let first = service.register(NAME, EMAIL).await;
    let second = service.register(NAME, EMAIL).await;

    assert_eq!(first, RegistrationResult::failure());
    assert_eq!(second, RegistrationResult::success());
    assert_raised_once(&world.errors);
    assert_eq!(world.newsletter.calls().len(), 1);
}

#[rstest]
#[tokio::test]
async fn concurrent_registrations_are_independent(world: World) {
    let service = world.service();
    let other = service.clone();

    let (left, right) = tokio::join!(
        service.register(NAME, EMAIL),
        other.register("", EMAIL),
    );

    assert!(left.is_success());
    assert!(right.is_success());
    assert_eq!(world.users.calls().len(), 2);
}

#[rstest]
#[tokio::test]
async fn driving_port_accepts_requests(world: World) {
    let port: Arc<dyn UserRegistration> = Arc::new(world.service());

    let result = port.register(RegistrationRequest::new(NAME, EMAIL)).await;

    assert!(result.is_success());
    assert_eq!(
        world.users.calls(),
        vec![(NAME.to_owned(), EMAIL.to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn in_memory_adapters_run_the_workflow_end_to_end() {
    let users = Arc::new(InMemoryUserRepository::new());
    let newsletter = Arc::new(InMemoryNewsletter::new());
    let logger = RecordingLogger::default();
    let errors = RecordingErrorChannel::default();
    let service = RegistrationService::new(
        Arc::clone(&users),
        Arc::clone(&newsletter),
        Arc::new(logger.clone()),
        Arc::new(errors.clone()),
    );

    let registered = service.register(NAME, EMAIL).await;
    let rejected = service.register("", EMAIL).await;

    assert_eq!(registered, RegistrationResult::success());
    assert_eq!(rejected, RegistrationResult::failure());
    assert_eq!(users.users(), vec![mock_user()]);
    assert!(newsletter.is_subscribed(UserId::new(1)));
    assert_eq!(errors.raised(), vec![CodedError::registration_failed()]);

    let levels: Vec<Level> = logger.events().iter().map(|event| event.level).collect();
    assert_eq!(levels, vec![Level::Info, Level::Error]);
}

#[rstest]
#[tokio::test]
async fn results_serialise_to_the_uniform_shape(world: World, rejecting_world: World) {
    let ok = world.service().register(NAME, EMAIL).await;
    let failed = rejecting_world.service().register("", EMAIL).await;

    assert_eq!(
        serde_json::to_value(&ok).expect("result serialises"),
        json!({ "msg": "user registered successfully" })
    );
    assert_eq!(
        serde_json::to_value(&failed).expect("result serialises"),
        json!({ "msg": "failed to register user" })
    );
}
