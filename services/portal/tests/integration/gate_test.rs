use lumina_domain::user::Role;

use lumina_portal::error::PortalError;
use lumina_portal::usecase::gate::RoleGate;
use lumina_portal::usecase::session::{Session, SessionResolver};

use crate::helpers::{MockIdentity, MockUserRepo, test_identity, test_user, token};

fn gate_for(user: lumina_portal::domain::types::User) -> RoleGate<MockIdentity, MockUserRepo> {
    RoleGate {
        resolver: SessionResolver {
            identity: MockIdentity::resolving(test_identity()),
            users: MockUserRepo::new(vec![user]),
        },
    }
}

#[tokio::test]
async fn admin_passes_admin_gate() {
    let gate = gate_for(test_user(Some(Role::Admin)));
    let session = Session::new(Some(token()));
    let user = gate.require(&session, &[Role::Admin]).await.unwrap();
    assert_eq!(user.effective_role(), Role::Admin);
}

#[tokio::test]
async fn plain_user_is_forbidden_from_admin_gate() {
    let gate = gate_for(test_user(Some(Role::User)));
    let session = Session::new(Some(token()));
    let result = gate.require(&session, &[Role::Admin]).await;
    assert!(matches!(result, Err(PortalError::Forbidden)));
}

#[tokio::test]
async fn roleless_user_is_treated_as_plain_user() {
    let gate = gate_for(test_user(None));
    let session = Session::new(Some(token()));

    let result = gate.require(&session, &[Role::Admin]).await;
    assert!(matches!(result, Err(PortalError::Forbidden)));

    let result = gate.require(&session, &[Role::User]).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn mentor_passes_mentor_or_admin_gate() {
    let gate = gate_for(test_user(Some(Role::Mentor)));
    let session = Session::new(Some(token()));
    let result = gate.require(&session, &[Role::Admin, Role::Mentor]).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn banned_admin_is_forbidden() {
    let mut user = test_user(Some(Role::Admin));
    user.banned = true;
    let gate = gate_for(user);
    let session = Session::new(Some(token()));
    let result = gate.require(&session, &[Role::Admin]).await;
    assert!(matches!(result, Err(PortalError::Forbidden)));
}

#[tokio::test]
async fn anonymous_caller_is_unauthenticated_not_forbidden() {
    let gate = gate_for(test_user(Some(Role::Admin)));
    let session = Session::anonymous();
    let result = gate.require(&session, &[Role::Admin]).await;
    assert!(matches!(result, Err(PortalError::Unauthenticated)));
}
