use super::prelude::*;

pub fn should_show_install_prompt<R: InstallPromptRepo>(repo: &R, client_id: &Id) -> Result<bool> {
    Ok(!repo.is_install_prompt_dismissed(client_id)?)
}

pub fn dismiss_install_prompt<R: InstallPromptRepo>(repo: &R, client_id: &Id) -> Result<()> {
    log::debug!("Client {client_id} dismissed the install prompt");
    Ok(repo.dismiss_install_prompt(client_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn dismiss_once() {
        let db = MockDb::default();
        let client = Id::new();
        assert!(should_show_install_prompt(&db, &client).unwrap());
        dismiss_install_prompt(&db, &client).unwrap();
        assert!(!should_show_install_prompt(&db, &client).unwrap());
        dismiss_install_prompt(&db, &client).unwrap();
        assert!(!should_show_install_prompt(&db, &client).unwrap());
        assert!(should_show_install_prompt(&db, &Id::new()).unwrap());
    }
}
