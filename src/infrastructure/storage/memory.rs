//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    Country, CountryRepository, DomainError, DomainResult, Like, LikeRepository, NewUser,
    NewVacation, RepositoryProvider, Role, RoleRepository, User, UserRepository, Vacation,
    VacationRepository,
};
use crate::shared::ConflictError;

/// In-memory storage for development and testing.
///
/// Uniqueness (role name, email, country name, one like per pair) goes
/// through DashMap's entry API so concurrent inserts cannot both win.
/// Deleting a vacation or a country cascades the way the SQL schema does.
pub struct InMemoryStorage {
    roles: DashMap<i32, Role>,
    role_names: DashMap<String, i32>,
    users: DashMap<i32, User>,
    user_emails: DashMap<String, i32>,
    countries: DashMap<i32, Country>,
    country_names: DashMap<String, i32>,
    vacations: DashMap<i32, Vacation>,
    likes: DashMap<(i32, i32), Like>,
    role_counter: AtomicI32,
    user_counter: AtomicI32,
    country_counter: AtomicI32,
    vacation_counter: AtomicI32,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            roles: DashMap::new(),
            role_names: DashMap::new(),
            users: DashMap::new(),
            user_emails: DashMap::new(),
            countries: DashMap::new(),
            country_names: DashMap::new(),
            vacations: DashMap::new(),
            likes: DashMap::new(),
            role_counter: AtomicI32::new(1),
            user_counter: AtomicI32::new(1),
            country_counter: AtomicI32::new(1),
            vacation_counter: AtomicI32::new(1),
        }
    }

    /// Counted inside `retain`; `len()` moves under concurrent inserts.
    fn remove_likes_where(&self, pred: impl Fn(&Like) -> bool) -> u64 {
        let mut removed = 0;
        self.likes.retain(|_, like| {
            if pred(like) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    fn remove_vacation(&self, id: i32) -> u64 {
        match self.vacations.remove(&id) {
            Some(_) => {
                self.remove_likes_where(|l| l.vacation_id == id);
                1
            }
            None => 0,
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(counter: &AtomicI32) -> i32 {
    counter.fetch_add(1, Ordering::SeqCst)
}

#[async_trait]
impl RoleRepository for InMemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Role>> {
        Ok(self.roles.get(&id).map(|r| r.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Role>> {
        Ok(self
            .role_names
            .get(name)
            .and_then(|id| self.roles.get(&*id).map(|r| r.clone())))
    }

    async fn find_all(&self) -> DomainResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.iter().map(|e| e.value().clone()).collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn create(&self, name: &str) -> DomainResult<Role> {
        match self.role_names.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ConflictError::DuplicateRole(name.to_string()).into()),
            Entry::Vacant(slot) => {
                let role = Role {
                    id: next_id(&self.role_counter),
                    name: name.to_string(),
                };
                self.roles.insert(role.id, role.clone());
                slot.insert(role.id);
                Ok(role)
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .user_emails
            .get(email)
            .and_then(|id| self.users.get(&*id).map(|u| u.clone())))
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        if !self.roles.contains_key(&user.role_id) {
            return Err(DomainError::not_found("Role", user.role_id));
        }
        match self.user_emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(ConflictError::DuplicateEmail(user.email).into()),
            Entry::Vacant(slot) => {
                let user = User {
                    id: next_id(&self.user_counter),
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    password_hash: user.password_hash,
                    role_id: user.role_id,
                    is_staff: user.is_staff,
                };
                self.users.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.len() as u64)
    }
}

#[async_trait]
impl CountryRepository for InMemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Country>> {
        Ok(self.countries.get(&id).map(|c| c.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>> {
        Ok(self
            .country_names
            .get(name)
            .and_then(|id| self.countries.get(&*id).map(|c| c.clone())))
    }

    async fn find_all(&self) -> DomainResult<Vec<Country>> {
        let mut countries: Vec<Country> =
            self.countries.iter().map(|e| e.value().clone()).collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }

    async fn create(&self, name: &str) -> DomainResult<Country> {
        match self.country_names.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ConflictError::DuplicateCountry(name.to_string()).into()),
            Entry::Vacant(slot) => {
                let country = Country {
                    id: next_id(&self.country_counter),
                    name: name.to_string(),
                };
                self.countries.insert(country.id, country.clone());
                slot.insert(country.id);
                Ok(country)
            }
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<u64> {
        let Some((_, country)) = self.countries.remove(&id) else {
            return Ok(0);
        };
        self.country_names.remove(&country.name);

        let orphaned: Vec<i32> = self
            .vacations
            .iter()
            .filter(|v| v.country_id == id)
            .map(|v| v.id)
            .collect();
        for vacation_id in orphaned {
            self.remove_vacation(vacation_id);
        }
        Ok(1)
    }
}

#[async_trait]
impl VacationRepository for InMemoryStorage {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vacation>> {
        Ok(self.vacations.get(&id).map(|v| v.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Vacation>> {
        let mut vacations: Vec<Vacation> =
            self.vacations.iter().map(|e| e.value().clone()).collect();
        vacations.sort_by_key(|v| (v.start_date, v.id));
        Ok(vacations)
    }

    async fn find_by_country(&self, country_id: i32) -> DomainResult<Vec<Vacation>> {
        let mut vacations: Vec<Vacation> = self
            .vacations
            .iter()
            .filter(|v| v.country_id == country_id)
            .map(|v| v.clone())
            .collect();
        vacations.sort_by_key(|v| (v.start_date, v.id));
        Ok(vacations)
    }

    async fn create(&self, vacation: NewVacation) -> DomainResult<Vacation> {
        if !self.countries.contains_key(&vacation.country_id) {
            return Err(DomainError::not_found("Country", vacation.country_id));
        }
        let vacation = Vacation {
            id: next_id(&self.vacation_counter),
            country_id: vacation.country_id,
            description: vacation.description,
            start_date: vacation.start_date,
            end_date: vacation.end_date,
            price: vacation.price,
            image_filename: vacation.image_filename,
        };
        self.vacations.insert(vacation.id, vacation.clone());
        Ok(vacation)
    }

    async fn update(&self, vacation: Vacation) -> DomainResult<Vacation> {
        if !self.countries.contains_key(&vacation.country_id) {
            return Err(DomainError::not_found("Country", vacation.country_id));
        }
        match self.vacations.get_mut(&vacation.id) {
            Some(mut stored) => {
                *stored = vacation.clone();
                Ok(vacation)
            }
            None => Err(DomainError::not_found("Vacation", vacation.id)),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<u64> {
        Ok(self.remove_vacation(id))
    }
}

#[async_trait]
impl LikeRepository for InMemoryStorage {
    async fn exists(&self, user_id: i32, vacation_id: i32) -> DomainResult<bool> {
        Ok(self.likes.contains_key(&(user_id, vacation_id)))
    }

    async fn create(&self, like: Like) -> DomainResult<()> {
        if !self.users.contains_key(&like.user_id) {
            return Err(DomainError::not_found("User", like.user_id));
        }
        if !self.vacations.contains_key(&like.vacation_id) {
            return Err(DomainError::not_found("Vacation", like.vacation_id));
        }
        match self.likes.entry((like.user_id, like.vacation_id)) {
            Entry::Occupied(_) => Err(ConflictError::AlreadyLiked {
                user_id: like.user_id,
                vacation_id: like.vacation_id,
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(like);
                Ok(())
            }
        }
    }

    async fn delete(&self, user_id: i32, vacation_id: i32) -> DomainResult<u64> {
        Ok(self.likes.remove(&(user_id, vacation_id)).map_or(0, |_| 1))
    }

    async fn delete_by_vacation(&self, vacation_id: i32) -> DomainResult<u64> {
        Ok(self.remove_likes_where(|l| l.vacation_id == vacation_id))
    }

    async fn count_all(&self) -> DomainResult<u64> {
        Ok(self.likes.len() as u64)
    }

    async fn count_for_vacation(&self, vacation_id: i32) -> DomainResult<u64> {
        Ok(self
            .likes
            .iter()
            .filter(|l| l.vacation_id == vacation_id)
            .count() as u64)
    }

    async fn count_by_vacation(&self) -> DomainResult<HashMap<i32, u64>> {
        let mut counts = HashMap::new();
        for like in self.likes.iter() {
            *counts.entry(like.vacation_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn vacation_ids_liked_by(&self, user_id: i32) -> DomainResult<Vec<i32>> {
        Ok(self
            .likes
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| l.vacation_id)
            .collect())
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn roles(&self) -> &dyn RoleRepository {
        self
    }

    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn countries(&self) -> &dyn CountryRepository {
        self
    }

    fn vacations(&self) -> &dyn VacationRepository {
        self
    }

    fn likes(&self) -> &dyn LikeRepository {
        self
    }
}
